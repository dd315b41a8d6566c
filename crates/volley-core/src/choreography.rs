//! Phase logic: maps smoothed scroll progress to target transforms.
//!
//! [`Choreography::evaluate`] is pure apart from the wall-clock time it is
//! handed for the idle float. Page metrics arrive pre-queried in a
//! [`ShowcaseProbe`], so nothing here touches the page layer.

use crate::config::ChoreographyConfig;
use crate::constants::*;
use crate::math::{clamp01, ease_in_out_cubic, fraction, lerp, Rgb};
use crate::scene::EntityTransform;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitStage {
    Prep,
    Swing,
}

/// Content-driven sub-stages of the showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseStage {
    /// Stage 1: zoom on the racket head.
    Focus,
    /// Stage 2: follow the first tracked section.
    Track,
    /// Stage 3: follow the second tracked section while turning.
    Detail,
}

impl ShowcaseStage {
    pub fn for_content(content_progress: f32) -> Self {
        let cp = clamp01(content_progress);
        if cp < STAGE_TRACK_START {
            ShowcaseStage::Focus
        } else if cp < STAGE_DETAIL_START {
            ShowcaseStage::Track
        } else {
            ShowcaseStage::Detail
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    BallDescent,
    Hit(HitStage),
    Showcase(ShowcaseStage),
}

impl Phase {
    pub fn classify(progress: f32, content_progress: f32) -> Self {
        let p = clamp01(progress);
        if p > HIT_END {
            Phase::Showcase(ShowcaseStage::for_content(content_progress))
        } else if p > INTRO_END {
            if fraction(p, INTRO_END, HIT_END) < HIT_PREP_SPLIT {
                Phase::Hit(HitStage::Prep)
            } else {
                Phase::Hit(HitStage::Swing)
            }
        } else if p > BALL_DESCENT_START {
            Phase::BallDescent
        } else {
            Phase::Intro
        }
    }

    pub fn is_showcase(&self) -> bool {
        matches!(self, Phase::Showcase(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::BallDescent => "ball-descent",
            Phase::Hit(HitStage::Prep) => "hit.prep",
            Phase::Hit(HitStage::Swing) => "hit.swing",
            Phase::Showcase(ShowcaseStage::Focus) => "showcase.focus",
            Phase::Showcase(ShowcaseStage::Track) => "showcase.track",
            Phase::Showcase(ShowcaseStage::Detail) => "showcase.detail",
        }
    }
}

/// Raw (un-eased) swing fraction for `progress`, if it falls in Hit.Swing.
pub fn swing_fraction(progress: f32) -> Option<f32> {
    match Phase::classify(progress, 0.0) {
        Phase::Hit(HitStage::Swing) => Some(fraction(
            fraction(progress, INTRO_END, HIT_END),
            HIT_PREP_SPLIT,
            1.0,
        )),
        _ => None,
    }
}

/// Progress at which the swing fraction equals `raw_swing`.
pub fn progress_for_swing(raw_swing: f32) -> f32 {
    let hit_t = lerp(HIT_PREP_SPLIT, 1.0, clamp01(raw_swing));
    lerp(INTRO_END, HIT_END, hit_t)
}

/// How the page header should contrast against the current background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Light text over the dark scene.
    Inverted,
    /// Dark text on a solid light bar.
    Solid,
}

/// Page metrics for section tracking, read by the driver before evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShowcaseProbe {
    pub viewport_height: f32,
    /// On-screen vertical center (CSS px from viewport top) of the section
    /// tracked by the current stage, if it exists.
    pub section_center: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoreographyOutput {
    pub phase: Phase,
    pub racket: EntityTransform,
    pub ball: EntityTransform,
    pub background: Rgb,
    /// 0 = dark reference color, 1 = light reference color.
    pub background_mix: f32,
    pub header: HeaderStyle,
    pub content_visible: bool,
    /// Racket Y follows page scroll exactly this tick (no smoothing).
    pub pin_racket_y: bool,
}

pub struct Choreography {
    config: ChoreographyConfig,
    dark: Rgb,
    light: Rgb,
}

impl Default for Choreography {
    fn default() -> Self {
        Self::new(ChoreographyConfig::default())
    }
}

impl Choreography {
    pub fn new(config: ChoreographyConfig) -> Self {
        Self {
            config,
            dark: Rgb::from_array(DARK_BG),
            light: Rgb::from_array(LIGHT_BG),
        }
    }

    pub fn config(&self) -> &ChoreographyConfig {
        &self.config
    }

    /// Section the given phase wants measured, if any.
    pub fn tracked_section(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Showcase(ShowcaseStage::Track) => Some(self.config.track_section_id.as_str()),
            Phase::Showcase(ShowcaseStage::Detail) => Some(self.config.detail_section_id.as_str()),
            _ => None,
        }
    }

    pub fn evaluate(
        &self,
        progress: f32,
        content_progress: f32,
        time_sec: f64,
        probe: &ShowcaseProbe,
    ) -> ChoreographyOutput {
        let p = clamp01(progress);
        let cp = clamp01(content_progress);
        let phase = Phase::classify(p, cp);
        let idle = self.idle_float(time_sec);
        match phase {
            Phase::Intro | Phase::BallDescent => self.intro(phase, p, idle),
            Phase::Hit(stage) => self.hit(phase, stage, p),
            Phase::Showcase(stage) => self.showcase(phase, stage, p, cp, probe, idle),
        }
    }

    fn idle_float(&self, time_sec: f64) -> f32 {
        if !time_sec.is_finite() {
            return 0.0;
        }
        let phase = time_sec * std::f64::consts::TAU * IDLE_FLOAT_HZ as f64;
        self.config.idle_amplitude * phase.sin() as f32
    }

    fn intro(&self, phase: Phase, p: f32, idle: f32) -> ChoreographyOutput {
        let t = fraction(p, 0.0, INTRO_END);
        let racket = EntityTransform::new(
            Vec3::new(
                0.0,
                idle * (1.0 - t),
                lerp(RACKET_INTRO_Z_START, RACKET_INTRO_Z_END, t),
            ),
            Vec3::new(lerp(RACKET_INTRO_ROT_START, RACKET_INTRO_ROT_END, t), 0.0, 0.0),
            Vec3::splat(RACKET_SCALE),
        );

        let bt = fraction(p, BALL_DESCENT_START, INTRO_END);
        let ball_pos = BALL_START.lerp(BALL_IMPACT, bt);
        let spin = bt * BALL_DESCENT_SPIN;
        let ball_rot = Vec3::new(spin, spin * 0.5, 0.0);
        let ball = if phase == Phase::BallDescent {
            EntityTransform::new(ball_pos, ball_rot, Vec3::splat(BALL_SCALE))
        } else {
            EntityTransform::hidden(ball_pos, ball_rot)
        };

        self.output(phase, racket, ball, 0.0, HeaderStyle::Inverted)
    }

    fn hit(&self, phase: Phase, stage: HitStage, p: f32) -> ChoreographyOutput {
        let hit_t = fraction(p, INTRO_END, HIT_END);
        let wound = RACKET_INTRO_ROT_END + RACKET_PREP_BACKSWING;
        let impact_spin = Vec3::new(BALL_DESCENT_SPIN, BALL_DESCENT_SPIN * 0.5, 0.0);

        match stage {
            HitStage::Prep => {
                let prep = fraction(hit_t, 0.0, HIT_PREP_SPLIT);
                let racket = EntityTransform::new(
                    Vec3::new(0.0, 0.0, RACKET_INTRO_Z_END),
                    Vec3::new(RACKET_INTRO_ROT_END + RACKET_PREP_BACKSWING * prep, 0.0, 0.0),
                    Vec3::splat(RACKET_SCALE),
                );
                let ball =
                    EntityTransform::new(BALL_IMPACT, impact_spin, Vec3::splat(BALL_SCALE));
                self.output(phase, racket, ball, 0.0, HeaderStyle::Inverted)
            }
            HitStage::Swing => {
                let raw = fraction(hit_t, HIT_PREP_SPLIT, 1.0);
                let eased = ease_in_out_cubic(raw);

                let racket = EntityTransform::new(
                    Vec3::new(0.0, 0.0, RACKET_INTRO_Z_END),
                    Vec3::new(
                        lerp(wound, RACKET_SWING_END_ROT, eased),
                        RACKET_SWING_TWIST * (eased * std::f32::consts::PI).sin(),
                        0.0,
                    ),
                    Vec3::splat(RACKET_SCALE),
                );

                let ball_pos = BALL_IMPACT.lerp(BALL_FLY_TARGET, eased);
                let spin = BALL_DESCENT_SPIN + eased * BALL_HIT_SPIN;
                let ball_rot = Vec3::new(spin, spin * 0.5, 0.0);
                let ball = if raw > BALL_HIDE_SWING {
                    EntityTransform::hidden(ball_pos, ball_rot)
                } else {
                    let grow = 1.0 + (BALL_MAX_SCALE_MULTIPLIER - 1.0) * eased * eased;
                    EntityTransform::new(ball_pos, ball_rot, Vec3::splat(BALL_SCALE * grow))
                };

                let mix = fraction(raw, BG_FADE_START, BG_FADE_END);
                let header = if raw > BG_FADE_START {
                    HeaderStyle::Solid
                } else {
                    HeaderStyle::Inverted
                };
                self.output(phase, racket, ball, mix, header)
            }
        }
    }

    fn showcase(
        &self,
        phase: Phase,
        stage: ShowcaseStage,
        p: f32,
        cp: f32,
        probe: &ShowcaseProbe,
        idle: f32,
    ) -> ChoreographyOutput {
        let reveal = ease_in_out_cubic(fraction(p, HIT_END, HIT_END + SHOWCASE_REVEAL_SPAN));
        let rot_x = lerp(
            RACKET_SWING_END_ROT,
            RACKET_SWING_END_ROT + RACKET_REVEAL_TURN,
            reveal,
        );
        let side_x = lerp(0.0, RACKET_SIDE_X, reveal);

        let mut pin = false;
        let (x, y, z, rot_y) = match stage {
            ShowcaseStage::Focus => {
                let e = ease_in_out_cubic(fraction(cp, 0.0, STAGE_TRACK_START));
                (
                    side_x,
                    lerp(0.0, FOCUS_Y, e) + idle * reveal,
                    lerp(RACKET_INTRO_Z_END, FOCUS_Z, e),
                    0.0,
                )
            }
            ShowcaseStage::Track => {
                let y = match self.tracked_y(probe) {
                    Some(y) => {
                        pin = true;
                        y
                    }
                    None => self.fallback_y(cp),
                };
                (side_x, y, FOCUS_Z, 0.0)
            }
            ShowcaseStage::Detail => {
                let e = ease_in_out_cubic(fraction(cp, STAGE_DETAIL_START, 1.0));
                let y = match self.tracked_y(probe) {
                    Some(y) => {
                        pin = true;
                        y
                    }
                    None => self.fallback_y(cp),
                };
                (lerp(side_x, -side_x, e), y, FOCUS_Z, lerp(0.0, DETAIL_TURN, e))
            }
        };

        let racket = EntityTransform::new(
            Vec3::new(x, y, z),
            Vec3::new(rot_x, rot_y, 0.0),
            Vec3::splat(RACKET_SCALE),
        );
        let spin = BALL_DESCENT_SPIN + BALL_HIT_SPIN;
        let ball = EntityTransform::hidden(BALL_FLY_TARGET, Vec3::new(spin, spin * 0.5, 0.0));

        let mut out = self.output(phase, racket, ball, 1.0, HeaderStyle::Solid);
        out.pin_racket_y = pin;
        out
    }

    /// World Y that keeps the racket level with the tracked section:
    /// `anchor_y - pixel_offset * world_height / viewport_height`.
    fn tracked_y(&self, probe: &ShowcaseProbe) -> Option<f32> {
        let center = probe.section_center.filter(|c| c.is_finite())?;
        let viewport = probe.viewport_height;
        if !viewport.is_finite() || viewport <= 0.0 {
            return None;
        }
        let pixel_offset = center - viewport * 0.5;
        Some(self.config.anchor_y - pixel_offset * self.config.world_units_per_pixel(viewport))
    }

    fn fallback_y(&self, cp: f32) -> f32 {
        lerp(
            FOCUS_Y,
            TRACK_FALLBACK_END_Y,
            fraction(cp, STAGE_TRACK_START, 1.0),
        )
    }

    fn output(
        &self,
        phase: Phase,
        racket: EntityTransform,
        ball: EntityTransform,
        mix: f32,
        header: HeaderStyle,
    ) -> ChoreographyOutput {
        let mix = clamp01(mix);
        ChoreographyOutput {
            phase,
            racket,
            ball,
            background: self.dark.lerp(self.light, mix),
            background_mix: mix,
            header,
            content_visible: phase.is_showcase(),
            pin_racket_y: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_covers_documented_ranges() {
        assert_eq!(Phase::classify(0.0, 0.0), Phase::Intro);
        assert_eq!(Phase::classify(0.35, 0.0), Phase::Intro);
        assert_eq!(Phase::classify(0.36, 0.0), Phase::BallDescent);
        assert_eq!(Phase::classify(0.5, 0.0), Phase::BallDescent);
        assert_eq!(Phase::classify(0.55, 0.0), Phase::Hit(HitStage::Prep));
        assert_eq!(Phase::classify(0.7, 0.0), Phase::Hit(HitStage::Swing));
        assert_eq!(Phase::classify(0.75, 0.9), Phase::Hit(HitStage::Swing));
        assert_eq!(
            Phase::classify(0.8, 0.1),
            Phase::Showcase(ShowcaseStage::Focus)
        );
        assert_eq!(
            Phase::classify(0.8, 0.33),
            Phase::Showcase(ShowcaseStage::Track)
        );
        assert_eq!(
            Phase::classify(0.8, 0.7),
            Phase::Showcase(ShowcaseStage::Detail)
        );
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Phase::classify(-3.0, 0.0), Phase::Intro);
        assert_eq!(Phase::classify(f32::NAN, 0.0), Phase::Intro);
        assert_eq!(
            Phase::classify(7.0, 2.0),
            Phase::Showcase(ShowcaseStage::Detail)
        );
    }

    #[test]
    fn swing_fraction_inverts_progress_for_swing() {
        for raw in [0.1_f32, 0.25, 0.6, 0.75, 1.0] {
            let p = progress_for_swing(raw);
            let back = swing_fraction(p).expect("inside swing");
            assert!((back - raw).abs() < 1e-4, "raw={raw} back={back}");
        }
        assert_eq!(swing_fraction(0.2), None);
    }

    #[test]
    fn tracked_section_only_in_tracking_stages() {
        let c = Choreography::default();
        assert_eq!(c.tracked_section(Phase::Intro), None);
        assert_eq!(
            c.tracked_section(Phase::Showcase(ShowcaseStage::Focus)),
            None
        );
        assert_eq!(
            c.tracked_section(Phase::Showcase(ShowcaseStage::Track)),
            Some("feature-grip")
        );
    }
}
