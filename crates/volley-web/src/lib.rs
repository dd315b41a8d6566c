#![cfg(target_arch = "wasm32")]
//! Browser binding: a `Stage` JS class that tracks page scroll, drives two
//! three.js objects and applies the page effects of the choreography.

use anyhow::Context;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use volley_core::{Choreography, FrameDriver, ScrollSnapshot, ScrollTracker};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod options;
mod page;
mod scene;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("volley-web starting");
    Ok(())
}

/// Read-only copy of the scroll state handed to JS.
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct SnapshotView {
    inner: ScrollSnapshot,
    smoothed: f32,
}

#[wasm_bindgen]
impl SnapshotView {
    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        self.inner.progress
    }
    #[wasm_bindgen(getter, js_name = contentProgress)]
    pub fn content_progress(&self) -> f32 {
        self.inner.content_progress
    }
    #[wasm_bindgen(getter)]
    pub fn velocity(&self) -> f32 {
        self.inner.velocity
    }
    #[wasm_bindgen(getter)]
    pub fn hit(&self) -> bool {
        self.inner.hit
    }
    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.inner.version as f64
    }
    #[wasm_bindgen(getter, js_name = smoothedProgress)]
    pub fn smoothed_progress(&self) -> f32 {
        self.smoothed
    }
}

#[wasm_bindgen]
pub struct Stage {
    ctx: Rc<RefCell<frame::FrameContext>>,
    tracker: Rc<RefCell<ScrollTracker>>,
    listeners: Vec<dom::Listener>,
    layout_watch: Option<dom::ResizeWatch>,
    frame_loop: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
impl Stage {
    /// `racket` and `ball` are three.js-style objects; `options` is an
    /// optional plain object of overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(racket: JsValue, ball: JsValue, options: JsValue) -> Result<Stage, JsValue> {
        build(&racket, &ball, &options).map_err(|e| {
            log::error!("stage init error: {:?}", e);
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    /// Advance one frame of `dt` seconds (for callers running their own loop).
    pub fn tick(&self, dt: f32) {
        self.ctx.borrow_mut().step(dt);
    }

    pub fn snapshot(&self) -> SnapshotView {
        let now = self.ctx.borrow().origin.elapsed().as_secs_f64();
        let mut tracker = self.tracker.borrow_mut();
        tracker.settle(now);
        SnapshotView {
            inner: tracker.snapshot(),
            smoothed: self.ctx.borrow().driver.smoothed_progress(),
        }
    }

    /// Manual "confirm" trigger; returns whether the hit has latched.
    pub fn confirm(&self) -> bool {
        self.tracker.borrow_mut().confirm()
    }

    /// Drive ticks from requestAnimationFrame.
    pub fn start(&mut self) {
        if self.frame_loop.as_ref().is_some_and(|l| l.is_running()) {
            return;
        }
        self.frame_loop = Some(frame::start_loop(self.ctx.clone()));
    }

    pub fn stop(&mut self) {
        if let Some(mut l) = self.frame_loop.take() {
            l.stop();
        }
    }

    /// Stop the loop and detach every page observer.
    pub fn dispose(&mut self) {
        self.stop();
        self.listeners.clear();
        self.layout_watch = None;
        log::info!("stage disposed");
    }
}

fn build(racket: &JsValue, ball: &JsValue, options: &JsValue) -> anyhow::Result<Stage> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let opts = options::StageOptions::from_js(options)?;

    let racket = scene::Object3dNode::new(racket).context("racket object")?;
    let ball = scene::Object3dNode::new(ball).context("ball object")?;

    let origin = Instant::now();
    let layout = dom::read_scroll_layout(&window, &document, &opts.tracker);
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(opts.tracker.clone(), layout)));
    tracker
        .borrow_mut()
        .observe(dom::scroll_offset(&window), 0.0);

    let page = page::DomPageLayer::new(
        window.clone(),
        document.clone(),
        &opts.header_id,
        &opts.reveal_id,
    );
    let driver = FrameDriver::new(
        racket,
        ball,
        page,
        Choreography::new(opts.choreography),
        opts.driver,
    );
    let listeners = events::wire_scroll_tracking(&window, &document, tracker.clone(), origin);
    let layout_watch = events::watch_layout(&window, &document, tracker.clone());
    log::info!(
        "[stage] ready: intro={} content={} progress={:.3} listeners={} layout_watch={}",
        opts.tracker.intro_id,
        opts.tracker.content_id,
        tracker.borrow().snapshot().progress,
        listeners.len(),
        layout_watch.is_some()
    );

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        driver,
        tracker.clone(),
        origin,
    )));
    Ok(Stage {
        ctx,
        tracker,
        listeners,
        layout_watch,
        frame_loop: None,
    })
}
