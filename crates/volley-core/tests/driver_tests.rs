// Host-side integration tests for the frame driver, using fake scene nodes
// and a fake page layer.

use glam::Vec3;
use std::collections::HashMap;
use volley_core::*;

const DT: f32 = 1.0 / 60.0;

#[derive(Default, Debug)]
struct RecordingNode {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    applies: usize,
}

impl SceneNode for RecordingNode {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.applies += 1;
    }
    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }
    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

#[derive(Default)]
struct FakePage {
    sections: HashMap<String, SectionRect>,
    viewport: f32,
    background: Option<Rgb>,
    headers: Vec<HeaderStyle>,
    transitions: Vec<RevealEvent>,
}

impl PageLayer for FakePage {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self.sections.get(id).copied()
    }
    fn viewport_height(&self) -> f32 {
        self.viewport
    }
    fn set_background(&mut self, color: Rgb) {
        self.background = Some(color);
    }
    fn set_header_style(&mut self, style: HeaderStyle) {
        self.headers.push(style);
    }
    fn transition_content(&mut self, direction: RevealEvent) {
        self.transitions.push(direction);
    }
}

type Driver = FrameDriver<RecordingNode, FakePage>;

fn driver_with(page: FakePage) -> Driver {
    FrameDriver::new(
        RecordingNode::default(),
        RecordingNode::default(),
        page,
        Choreography::default(),
        DriverParams::default(),
    )
}

fn driver() -> Driver {
    driver_with(FakePage {
        viewport: 1000.0,
        ..FakePage::default()
    })
}

fn snap(progress: f32, content_progress: f32) -> ScrollSnapshot {
    ScrollSnapshot {
        progress,
        content_progress,
        ..ScrollSnapshot::default()
    }
}

fn run(d: &mut Driver, s: ScrollSnapshot, ticks: usize) -> Vec<TickReport> {
    (0..ticks).map(|_| d.tick(s, DT, 0.0)).collect()
}

#[test]
fn owns_nineteen_channels() {
    assert_eq!(Driver::CHANNEL_COUNT, 19);
}

#[test]
fn rest_pose_is_applied_on_first_tick() {
    let mut d = driver();
    let r = d.tick(snap(0.0, 0.0), DT, 0.0);
    assert_eq!(r.phase, Phase::Intro);
    let (racket, ball) = d.nodes();
    assert!((racket.position.z - RACKET_INTRO_Z_START).abs() < 1e-5);
    assert_eq!(ball.scale, Vec3::ZERO);
    assert_eq!(d.page().background, Some(Rgb::from_array(DARK_BG)));
    assert_eq!(d.page().headers, vec![HeaderStyle::Inverted]);
    assert!(d.page().transitions.is_empty());
}

#[test]
fn header_is_written_only_when_it_changes() {
    let mut d = driver();
    run(&mut d, snap(0.0, 0.0), 120);
    assert_eq!(d.page().headers.len(), 1);
    run(&mut d, snap(1.0, 0.0), 600);
    assert_eq!(
        d.page().headers,
        vec![HeaderStyle::Inverted, HeaderStyle::Solid]
    );
    assert_eq!(d.page().background, Some(Rgb::from_array(LIGHT_BG)));
}

#[test]
fn meta_channel_lags_raw_progress() {
    let mut d = driver();
    let r = d.tick(snap(1.0, 0.0), DT, 0.0);
    let expected = damping_alpha(META_LAMBDA, DT);
    assert!((r.smoothed_progress - expected).abs() < 1e-6);
    assert_eq!(r.phase, Phase::Intro);
}

#[test]
fn resume_spike_is_clamped() {
    let mut d = driver();
    let r = d.tick(snap(1.0, 0.0), 10.0, 0.0);
    let expected = damping_alpha(META_LAMBDA, MAX_FRAME_DT);
    assert!((r.smoothed_progress - expected).abs() < 1e-6);

    let mut d = driver();
    let r = d.tick(snap(1.0, 0.0), f32::NAN, 0.0);
    assert_eq!(r.smoothed_progress, 0.0);
}

#[test]
fn scrolling_back_out_of_showcase_hides_once() {
    let mut d = driver();
    let down = run(&mut d, snap(0.9, 0.0), 1200);
    let shows: Vec<_> = down.iter().filter_map(|r| r.reveal).collect();
    assert_eq!(shows, vec![RevealEvent::Show]);
    assert!(d.is_revealed());

    let up = run(&mut d, snap(0.6, 0.0), 1200);
    let hides: Vec<_> = up.iter().filter_map(|r| r.reveal).collect();
    assert_eq!(hides, vec![RevealEvent::Hide]);
    let crossing = up.iter().position(|r| r.reveal.is_some()).unwrap();
    assert!(up[crossing].smoothed_progress <= HIT_END);
    assert!(up[..crossing].iter().all(|r| r.smoothed_progress > HIT_END));

    assert_eq!(
        d.page().transitions,
        vec![RevealEvent::Show, RevealEvent::Hide]
    );
}

#[test]
fn tracked_section_pins_racket_y_exactly() {
    let mut page = FakePage {
        viewport: 1000.0,
        ..FakePage::default()
    };
    page.sections.insert(
        "feature-grip".into(),
        SectionRect {
            top: 300.0,
            height: 400.0,
        },
    );
    let mut d = driver_with(page);
    run(&mut d, snap(1.0, 0.5), 900);

    d.page_mut().sections.insert(
        "feature-grip".into(),
        SectionRect {
            top: 100.0,
            height: 400.0,
        },
    );
    let r = d.tick(snap(1.0, 0.5), DT, 0.0);
    assert_eq!(r.phase, Phase::Showcase(ShowcaseStage::Track));
    let per_px = ChoreographyConfig::default().world_units_per_pixel(1000.0);
    let expected = TRACK_ANCHOR_Y - (300.0 - 500.0) * per_px;
    assert!((r.racket.position.y - expected).abs() < 1e-5);
    assert_eq!(d.nodes().0.position.y, r.racket.position.y);
}

#[test]
fn entering_track_with_off_center_section_jumps_in_one_frame() {
    let mut page = FakePage {
        viewport: 1000.0,
        ..FakePage::default()
    };
    page.sections.insert(
        "feature-grip".into(),
        SectionRect {
            top: 100.0,
            height: 400.0,
        },
    );
    let mut d = driver_with(page);
    run(&mut d, snap(1.0, 0.32), 900);
    let before = d.nodes().0.position;

    let r = d.tick(snap(1.0, 0.4), DT, 0.0);
    assert_eq!(r.phase, Phase::Showcase(ShowcaseStage::Track));
    let per_px = ChoreographyConfig::default().world_units_per_pixel(1000.0);
    let expected = TRACK_ANCHOR_Y - (300.0 - 500.0) * per_px;

    // y lands on the section at once; nothing smooths the step
    assert!((before.y - expected).abs() > 1.0);
    assert!((r.racket.position.y - expected).abs() < 1e-5);
}

#[test]
fn bypass_is_dropped_when_tracking_ends() {
    let mut page = FakePage {
        viewport: 1000.0,
        ..FakePage::default()
    };
    page.sections.insert(
        "feature-grip".into(),
        SectionRect {
            top: -2000.0,
            height: 400.0,
        },
    );
    let mut d = driver_with(page);
    run(&mut d, snap(1.0, 0.5), 900);
    let pinned_y = d.nodes().0.position.y;

    // back into the focus stage: y must ease toward its target, not jump
    let r = d.tick(snap(1.0, 0.2), DT, 0.0);
    assert_eq!(r.phase, Phase::Showcase(ShowcaseStage::Focus));
    let target = Choreography::default()
        .evaluate(r.smoothed_progress, 0.2, 0.0, &ShowcaseProbe::default())
        .racket
        .position
        .y;
    let moved = (r.racket.position.y - pinned_y).abs();
    let gap = (target - pinned_y).abs();
    assert!(moved > 0.0 && moved < gap, "moved={moved} gap={gap}");
}

#[test]
fn missing_section_keeps_smoothing() {
    let mut d = driver();
    run(&mut d, snap(1.0, 0.5), 900);
    let r = d.tick(snap(1.0, 0.6), DT, 0.0);
    let target = Choreography::default()
        .evaluate(r.smoothed_progress, 0.6, 0.0, &ShowcaseProbe::default())
        .racket
        .position
        .y;
    assert!((r.racket.position.y - target).abs() > 1e-4);
}

#[test]
fn reversing_scroll_converges_to_the_same_pose() {
    let mut a = driver();
    run(&mut a, snap(0.3, 0.0), 900);
    run(&mut a, snap(0.62, 0.0), 1500);

    let mut b = driver();
    run(&mut b, snap(1.0, 0.8), 900);
    run(&mut b, snap(0.62, 0.0), 1500);

    let (ra, ba) = a.nodes();
    let (rb, bb) = b.nodes();
    assert!((ra.position - rb.position).length() < 1e-3);
    assert!((ra.rotation - rb.rotation).length() < 1e-3);
    assert!((ba.scale - bb.scale).length() < 1e-3);
}

#[test]
fn every_tick_touches_both_nodes() {
    let mut d = driver();
    run(&mut d, snap(0.5, 0.0), 37);
    let (racket, ball) = d.nodes();
    assert_eq!(racket.applies, 37);
    assert_eq!(ball.applies, 37);
}
