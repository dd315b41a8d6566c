// Host-side integration tests for the scroll tracker.

use volley_core::*;

fn page() -> ScrollLayout {
    ScrollLayout {
        intro: Some(ScrollRegion::new(0.0, 3000.0)),
        content: Some(ScrollRegion::new(3000.0, 3000.0)),
        viewport_height: 1000.0,
        document_height: 6000.0,
    }
}

fn tracker(layout: ScrollLayout) -> ScrollTracker {
    ScrollTracker::new(TrackerConfig::default(), layout)
}

#[test]
fn missing_intro_uses_whole_page() {
    let mut t = tracker(ScrollLayout {
        intro: None,
        content: None,
        viewport_height: 1000.0,
        document_height: 5000.0,
    });
    t.observe(2000.0, 0.0);
    assert!((t.snapshot().progress - 0.5).abs() < 1e-6);
    t.observe(4000.0, 0.1);
    assert_eq!(t.snapshot().progress, 1.0);
}

#[test]
fn missing_content_uses_the_rest_of_the_page() {
    let mut t = tracker(ScrollLayout {
        content: None,
        ..page()
    });
    // intro finishes at offset 2000; the remaining 4000px span 2000..5000
    t.observe(2000.0, 0.0);
    assert_eq!(t.snapshot().content_progress, 0.0);
    t.observe(3500.0, 0.1);
    assert!((t.snapshot().content_progress - 0.5).abs() < 1e-6);
}

#[test]
fn content_never_starts_before_intro_ends() {
    let mut t = tracker(ScrollLayout {
        content: Some(ScrollRegion::new(500.0, 4000.0)),
        ..page()
    });
    t.observe(1500.0, 0.0);
    assert!(t.snapshot().progress < 1.0);
    assert_eq!(t.snapshot().content_progress, 0.0);
}

#[test]
fn tiny_pages_do_not_divide_by_zero() {
    let mut t = tracker(ScrollLayout {
        intro: Some(ScrollRegion::new(0.0, 500.0)),
        content: None,
        viewport_height: 1000.0,
        document_height: 500.0,
    });
    t.observe(0.0, 0.0);
    let s = t.snapshot();
    assert!(s.progress.is_finite() && s.content_progress.is_finite());
    t.observe(f32::NAN, 0.1);
    assert!(t.snapshot().progress.is_finite());
}

#[test]
fn hit_latches_only_past_threshold() {
    let mut t = tracker(page());
    t.observe(1200.0, 0.0); // progress 0.6 exactly
    assert!(!t.snapshot().hit);
    t.observe(1202.0, 0.1);
    assert!(t.snapshot().hit);
}

#[test]
fn confirm_is_gated_and_sticky() {
    let mut t = tracker(page());
    t.observe(600.0, 0.0); // 0.3
    assert!(!t.confirm());
    assert!(!t.snapshot().hit);
    t.observe(900.0, 0.1); // 0.45
    assert!(t.confirm());
    t.observe(0.0, 0.2);
    assert!(t.snapshot().hit, "hit must survive scrolling back up");
    t.reset();
    assert!(t.snapshot().hit, "hit must survive re-entry");
    assert_eq!(t.snapshot().progress, 0.0);
    assert_eq!(t.snapshot().velocity, 0.0);
}

#[test]
fn relayout_republishes_at_last_offset() {
    let mut t = tracker(page());
    t.observe(1000.0, 0.0);
    let before = t.snapshot();
    assert!((before.progress - 0.5).abs() < 1e-6);
    t.set_layout(ScrollLayout {
        intro: Some(ScrollRegion::new(0.0, 5000.0)),
        ..page()
    });
    let after = t.snapshot();
    assert!((after.progress - 0.25).abs() < 1e-6);
    assert!(after.version > before.version);
}

#[test]
fn scrolling_up_reports_negative_velocity() {
    let mut t = tracker(page());
    t.observe(800.0, 2.0);
    t.observe(700.0, 2.25);
    assert!((t.snapshot().velocity + 400.0).abs() < 1e-2);
}

#[test]
fn velocity_returns_to_zero_once_scrolling_stops() {
    let mut t = tracker(page());
    t.observe(100.0, 0.0);
    t.observe(200.0, 0.1);
    assert!((t.snapshot().velocity - 1000.0).abs() < 1e-2);

    // frames keep coming, scroll events do not
    let mut now = 0.1;
    for _ in 0..30 {
        now += 1.0 / 60.0;
        t.settle(now);
    }
    let rest = t.snapshot();
    assert_eq!(rest.velocity, 0.0);
    assert!((rest.progress - 0.1).abs() < 1e-6);

    // settling at rest does not republish
    t.settle(now + 1.0);
    assert_eq!(t.snapshot().version, rest.version);

    t.observe(260.0, now + 1.5);
    assert!(t.snapshot().velocity > 0.0);
}

#[test]
fn intro_growing_after_start_is_picked_up_without_resize() {
    // intro measured before its images loaded
    let short = ScrollLayout {
        intro: Some(ScrollRegion::new(0.0, 1500.0)),
        content: Some(ScrollRegion::new(1500.0, 3000.0)),
        viewport_height: 1000.0,
        document_height: 4500.0,
    };
    let mut t = tracker(short);
    t.observe(600.0, 0.0);
    assert_eq!(t.snapshot().progress, 1.0);

    t.set_layout(page());
    assert!((t.snapshot().progress - 0.3).abs() < 1e-6);
}

#[test]
fn unchanged_layout_does_not_republish() {
    let mut t = tracker(page());
    t.observe(1000.0, 0.0);
    let version = t.snapshot().version;
    t.set_layout(page());
    assert_eq!(t.snapshot().version, version);
}
