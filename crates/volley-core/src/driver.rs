//! Per-tick orchestration: smoothing, choreography and side effects.

use crate::choreography::{Choreography, ChoreographyOutput, HeaderStyle, Phase, ShowcaseProbe};
use crate::config::DriverParams;
use crate::damped::{clamp_dt, DampedChannel, EntityChannels};
use crate::latch::{RevealEvent, RevealLatch};
use crate::math::{clamp01, Rgb};
use crate::scene::{EntityTransform, SceneNode};
use crate::scroll::ScrollSnapshot;

/// On-screen bounding rectangle of a page section (CSS px, viewport-relative).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    pub fn center_y(&self) -> f32 {
        self.top + self.height * 0.5
    }
}

/// The page around the canvas: layout queries plus the effects the
/// choreography drives.
pub trait PageLayer {
    fn section_rect(&self, id: &str) -> Option<SectionRect>;
    fn viewport_height(&self) -> f32;
    fn set_background(&mut self, color: Rgb);
    fn set_header_style(&mut self, style: HeaderStyle);
    fn transition_content(&mut self, direction: RevealEvent);
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub phase: Phase,
    pub smoothed_progress: f32,
    pub reveal: Option<RevealEvent>,
    pub racket: EntityTransform,
    pub ball: EntityTransform,
}

pub struct FrameDriver<N: SceneNode, P: PageLayer> {
    racket_node: N,
    ball_node: N,
    page: P,
    choreography: Choreography,
    params: DriverParams,
    progress: DampedChannel,
    racket: EntityChannels,
    ball: EntityChannels,
    latch: RevealLatch,
    pin_racket_y: bool,
    last_header: Option<HeaderStyle>,
    last_phase: Option<Phase>,
}

impl<N: SceneNode, P: PageLayer> FrameDriver<N, P> {
    /// Total smoothed scalars: 9 per entity plus the progress meta-channel.
    pub const CHANNEL_COUNT: usize = 2 * EntityChannels::CHANNELS + 1;

    pub fn new(
        racket_node: N,
        ball_node: N,
        page: P,
        choreography: Choreography,
        params: DriverParams,
    ) -> Self {
        // Start settled on the p=0 pose so the first frames do not fly in.
        let rest = choreography.evaluate(0.0, 0.0, 0.0, &ShowcaseProbe::default());
        Self {
            racket_node,
            ball_node,
            page,
            params,
            progress: DampedChannel::new(0.0, params.meta_lambda),
            racket: EntityChannels::new(rest.racket, params.field_lambda),
            ball: EntityChannels::new(rest.ball, params.field_lambda),
            latch: RevealLatch::new(),
            pin_racket_y: false,
            last_header: None,
            last_phase: None,
            choreography,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn nodes(&self) -> (&N, &N) {
        (&self.racket_node, &self.ball_node)
    }

    pub fn smoothed_progress(&self) -> f32 {
        self.progress.current()
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.is_revealed()
    }

    pub fn params(&self) -> DriverParams {
        self.params
    }

    /// Advance one render tick of `dt` seconds against a copied snapshot.
    pub fn tick(&mut self, snapshot: ScrollSnapshot, dt: f32, time_sec: f64) -> TickReport {
        let dt = clamp_dt(dt, self.params.max_dt);
        self.pin_racket_y = false;

        let p = self.progress.advance(clamp01(snapshot.progress), dt);
        let cp = clamp01(snapshot.content_progress);

        let out = self.evaluate(p, cp, time_sec);
        self.pin_racket_y = out.pin_racket_y;

        let racket = self.racket.advance(&out.racket, dt, self.pin_racket_y);
        let ball = self.ball.advance(&out.ball, dt, false);
        self.racket_node.apply(&racket);
        self.ball_node.apply(&ball);

        self.page.set_background(out.background);
        if self.last_header != Some(out.header) {
            self.page.set_header_style(out.header);
            self.last_header = Some(out.header);
        }

        let reveal = self.latch.update(out.content_visible);
        if let Some(ev) = reveal {
            log::info!("[driver] content {:?} at progress={:.3}", ev, p);
            self.page.transition_content(ev);
        }

        if self.last_phase != Some(out.phase) {
            log::debug!("[driver] phase -> {} (p={:.3} cp={:.3})", out.phase.name(), p, cp);
            self.last_phase = Some(out.phase);
        }

        TickReport {
            phase: out.phase,
            smoothed_progress: p,
            reveal,
            racket,
            ball,
        }
    }

    /// Measure the tracked section (only when a tracking stage needs it) and
    /// run the choreography.
    fn evaluate(&self, p: f32, cp: f32, time_sec: f64) -> ChoreographyOutput {
        let phase = Phase::classify(p, cp);
        let probe = match self.choreography.tracked_section(phase) {
            Some(id) => ShowcaseProbe {
                viewport_height: self.page.viewport_height(),
                section_center: self.page.section_rect(id).map(|r| r.center_y()),
            },
            None => ShowcaseProbe::default(),
        };
        self.choreography.evaluate(p, cp, time_sec, &probe)
    }
}
