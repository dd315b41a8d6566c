//! Scroll tracking: turns raw page scroll offsets into a [`ScrollSnapshot`].
//!
//! The tracker is the single writer of the snapshot. Consumers receive copies
//! through [`ScrollTracker::snapshot`]; every publish bumps `version` so a
//! reader can tell whether anything changed since its last look.

use crate::config::TrackerConfig;
use crate::constants::VELOCITY_IDLE_SEC;
use crate::math::clamp01;

/// Published scroll state. Cheap to copy; never shared by reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub progress: f32,
    pub content_progress: f32,
    /// Scroll speed in CSS pixels per second (positive = scrolling down).
    pub velocity: f32,
    pub hit: bool,
    pub version: u64,
}

/// Vertical extent of a page region in document coordinates (CSS px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub top: f32,
    pub height: f32,
}

impl ScrollRegion {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Page metrics the tracker needs; refreshed on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollLayout {
    pub intro: Option<ScrollRegion>,
    pub content: Option<ScrollRegion>,
    pub viewport_height: f32,
    pub document_height: f32,
}

impl ScrollLayout {
    /// Scroll offsets over which the intro region plays, `[start, end]`.
    fn intro_span(&self) -> (f32, f32) {
        let region = self
            .intro
            .unwrap_or(ScrollRegion::new(0.0, self.document_height));
        scroll_span(region, self.viewport_height)
    }

    /// Content span; never starts before the intro span ends.
    fn content_span(&self) -> (f32, f32) {
        let (_, intro_end) = self.intro_span();
        let region = self.content.unwrap_or(ScrollRegion::new(
            intro_end,
            (self.document_height - intro_end).max(0.0),
        ));
        let (start, end) = scroll_span(region, self.viewport_height);
        let start = start.max(intro_end);
        (start, end.max(start))
    }
}

/// A region is traversed from its top reaching the viewport top to its bottom
/// reaching the viewport bottom.
fn scroll_span(region: ScrollRegion, viewport_height: f32) -> (f32, f32) {
    let start = region.top;
    let end = region.top + (region.height - viewport_height).max(0.0);
    (start, end)
}

fn span_progress(offset: f32, (start, end): (f32, f32)) -> f32 {
    let distance = end - start;
    if distance <= f32::EPSILON {
        return if offset >= end { 1.0 } else { 0.0 };
    }
    clamp01((offset - start) / distance)
}

pub struct ScrollTracker {
    config: TrackerConfig,
    layout: ScrollLayout,
    snapshot: ScrollSnapshot,
    last_sample: Option<(f32, f64)>,
    warned_missing_intro: bool,
}

impl ScrollTracker {
    pub fn new(config: TrackerConfig, layout: ScrollLayout) -> Self {
        let mut tracker = Self {
            config,
            layout,
            snapshot: ScrollSnapshot::default(),
            last_sample: None,
            warned_missing_intro: false,
        };
        tracker.check_layout();
        tracker
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.snapshot
    }

    /// Replace page metrics (e.g. after a resize or late content load) and
    /// republish at the last offset. Identical metrics are ignored.
    pub fn set_layout(&mut self, layout: ScrollLayout) {
        if layout == self.layout {
            return;
        }
        self.layout = layout;
        self.check_layout();
        if let Some((offset, _)) = self.last_sample {
            self.recompute(offset);
            self.publish();
        }
    }

    /// Record a scroll offset (CSS px) sampled at `time_sec`.
    pub fn observe(&mut self, offset: f32, time_sec: f64) {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        if let Some((prev_offset, prev_time)) = self.last_sample {
            let dt = time_sec - prev_time;
            if dt > 0.0 {
                self.snapshot.velocity = ((offset - prev_offset) as f64 / dt) as f32;
            }
        }
        self.last_sample = Some((offset, time_sec));
        self.recompute(offset);
        self.publish();
    }

    /// Called once per frame. Scroll events stop arriving when the page comes
    /// to rest, so a velocity older than [`VELOCITY_IDLE_SEC`] is dropped to zero.
    pub fn settle(&mut self, time_sec: f64) {
        if self.snapshot.velocity == 0.0 {
            return;
        }
        let idle = match self.last_sample {
            Some((_, last_time)) => time_sec - last_time >= VELOCITY_IDLE_SEC,
            None => true,
        };
        if idle {
            self.snapshot.velocity = 0.0;
            self.publish();
        }
    }

    /// Explicit "confirm" trigger; latches the hit early once past the gate.
    /// Returns whether the hit flag is set afterwards.
    pub fn confirm(&mut self) -> bool {
        if !self.snapshot.hit && self.snapshot.progress > self.config.confirm_min_progress {
            self.latch_hit("confirm");
            self.publish();
        }
        self.snapshot.hit
    }

    /// Page (re)entry: back to the top. The hit flag survives for the session.
    pub fn reset(&mut self) {
        self.snapshot.progress = 0.0;
        self.snapshot.content_progress = 0.0;
        self.snapshot.velocity = 0.0;
        self.last_sample = None;
        self.publish();
    }

    fn recompute(&mut self, offset: f32) {
        self.snapshot.progress = span_progress(offset, self.layout.intro_span());
        self.snapshot.content_progress = span_progress(offset, self.layout.content_span());
        if !self.snapshot.hit && self.snapshot.progress > self.config.hit_progress {
            self.latch_hit("progress");
        }
    }

    fn latch_hit(&mut self, source: &str) {
        self.snapshot.hit = true;
        log::info!(
            "[scroll] hit latched via {} at progress={:.3}",
            source,
            self.snapshot.progress
        );
    }

    fn publish(&mut self) {
        self.snapshot.version = self.snapshot.version.wrapping_add(1);
    }

    fn check_layout(&mut self) {
        if self.layout.intro.is_none() && !self.warned_missing_intro {
            log::warn!(
                "[scroll] #{} not found; treating the whole page as the intro region",
                self.config.intro_id
            );
            self.warned_missing_intro = true;
        }
    }
}
