use crate::page::DomPageLayer;
use crate::scene::Object3dNode;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use volley_core::{FrameDriver, ScrollTracker, TickReport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type StageDriver = FrameDriver<Object3dNode, DomPageLayer>;

pub struct FrameContext {
    pub driver: StageDriver,
    pub tracker: Rc<RefCell<ScrollTracker>>,
    pub origin: Instant,
    pub last_instant: Instant,
    pub hit_marked: bool,
}

impl FrameContext {
    pub fn new(driver: StageDriver, tracker: Rc<RefCell<ScrollTracker>>, origin: Instant) -> Self {
        Self {
            driver,
            tracker,
            origin,
            last_instant: Instant::now(),
            hit_marked: false,
        }
    }

    /// Tick using the wall-clock delta since the previous frame.
    pub fn frame(&mut self) -> TickReport {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.step(dt)
    }

    /// Tick with an externally supplied delta (seconds).
    pub fn step(&mut self, dt: f32) -> TickReport {
        let time = self.origin.elapsed().as_secs_f64();
        let snapshot = {
            let mut tracker = self.tracker.borrow_mut();
            tracker.settle(time);
            tracker.snapshot()
        };
        let report = self.driver.tick(snapshot, dt, time);
        if snapshot.hit && !self.hit_marked {
            self.driver.page().mark_hit();
            self.hit_marked = true;
        }
        report
    }
}

/// requestAnimationFrame loop; `stop` cancels the pending frame and releases
/// the callback.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        // breaks the closure's self-reference
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    // Drop the delta accumulated while the loop was idle.
    frame_ctx.borrow_mut().last_instant = Instant::now();

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        handle_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    handle.set(request_frame(&tick));
    FrameLoop {
        running,
        handle,
        tick,
    }
}
