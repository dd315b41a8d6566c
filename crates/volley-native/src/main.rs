use glam::Vec3;
use volley_core::{
    Choreography, ChoreographyConfig, DriverParams, FrameDriver, Phase, RevealEvent,
    ScrollLayout, ScrollRegion, ScrollTracker, TrackerConfig,
};

mod page;

use page::{RecordedNode, SimulatedPage};

const FPS: f32 = 60.0;
const SCROLL_DOWN_SEC: f32 = 8.0;
const HOLD_SEC: f32 = 1.5;
const SCROLL_UP_SEC: f32 = 6.0;

// racket head, in the racket's local space
const RACKET_HEAD: Vec3 = Vec3::new(0.0, 0.45, 0.0);

fn demo_page(tracker: &TrackerConfig, choreo: &ChoreographyConfig) -> SimulatedPage {
    let layout = ScrollLayout {
        intro: Some(ScrollRegion::new(0.0, 4000.0)),
        content: Some(ScrollRegion::new(4000.0, 3600.0)),
        viewport_height: 900.0,
        document_height: 7600.0,
    };
    log::info!(
        "[harness] page: #{} 0..4000px, #{} 4000..7600px, viewport 900px",
        tracker.intro_id,
        tracker.content_id
    );
    SimulatedPage::new(layout)
        .with_section(&choreo.track_section_id, ScrollRegion::new(5000.0, 600.0))
        .with_section(&choreo.detail_section_id, ScrollRegion::new(6200.0, 600.0))
}

/// Scripted scroll offset: ease down to the bottom, hold, come back up.
fn scripted_offset(t: f32, max_offset: f32) -> f32 {
    let smooth = |x: f32| {
        let x = x.clamp(0.0, 1.0);
        x * x * (3.0 - 2.0 * x)
    };
    if t < SCROLL_DOWN_SEC {
        max_offset * smooth(t / SCROLL_DOWN_SEC)
    } else if t < SCROLL_DOWN_SEC + HOLD_SEC {
        max_offset
    } else {
        max_offset * (1.0 - smooth((t - SCROLL_DOWN_SEC - HOLD_SEC) / SCROLL_UP_SEC))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let tracker_cfg = TrackerConfig::default();
    let choreo_cfg = ChoreographyConfig::default();
    let params = DriverParams::default();
    tracker_cfg.validate()?;
    choreo_cfg.validate()?;
    params.validate()?;

    let page = demo_page(&tracker_cfg, &choreo_cfg);
    let max_offset = page.max_offset();
    let mut tracker = ScrollTracker::new(tracker_cfg, page.layout);
    let mut driver = FrameDriver::new(
        RecordedNode::default(),
        RecordedNode::default(),
        page,
        Choreography::new(choreo_cfg),
        params,
    );

    let dt = 1.0 / FPS;
    // a little extra so smoothing settles at the top
    let total = SCROLL_DOWN_SEC + HOLD_SEC + SCROLL_UP_SEC + 3.0;
    let frames = (total * FPS) as usize;
    let mut last_phase: Option<Phase> = None;

    for i in 0..frames {
        let t = i as f32 * dt;
        let offset = scripted_offset(t, max_offset);
        driver.page_mut().offset = offset;
        tracker.observe(offset, t as f64);

        let report = driver.tick(tracker.snapshot(), dt, t as f64);
        if last_phase != Some(report.phase) {
            let head = report.racket.model_matrix().transform_point3(RACKET_HEAD);
            log::info!(
                "[harness] t={:5.2}s offset={:6.0}px p={:.3} -> {:<16} head=({:.2},{:.2},{:.2})",
                t,
                offset,
                report.smoothed_progress,
                report.phase.name(),
                head.x,
                head.y,
                head.z
            );
            last_phase = Some(report.phase);
        }
        if let Some(ev) = report.reveal {
            log::info!("[harness] t={:5.2}s reveal {:?}", t, ev);
        }
    }

    let shows = driver
        .page()
        .transitions
        .iter()
        .filter(|e| **e == RevealEvent::Show)
        .count();
    let hides = driver.page().transitions.len() - shows;
    let (racket, ball) = driver.nodes();
    log::info!(
        "[harness] done: frames={} shows={} hides={} hit={} peak_ball_scale={:.2} final_racket_z={:.2} background={:?}",
        frames,
        shows,
        hides,
        tracker.snapshot().hit,
        ball.peak_scale,
        racket.transform.position.z,
        driver.page().background.to_u8()
    );
    Ok(())
}
