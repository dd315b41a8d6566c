use crate::dom::{self, Listener, ResizeWatch};
use crate::style;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use volley_core::ScrollTracker;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach scroll, resize, page re-entry and confirm-key observers that feed
/// the tracker. Dropping the returned listeners detaches them.
pub fn wire_scroll_tracking(
    window: &web::Window,
    document: &web::Document,
    tracker: Rc<RefCell<ScrollTracker>>,
    origin: Instant,
) -> Vec<Listener> {
    let target: &web::EventTarget = window.as_ref();
    let mut listeners = Vec::with_capacity(5);

    let on_scroll = {
        let tracker = tracker.clone();
        let window = window.clone();
        move |_: web::Event| {
            let now = origin.elapsed().as_secs_f64();
            tracker
                .borrow_mut()
                .observe(dom::scroll_offset(&window), now);
        }
    };
    listeners.extend(Listener::new(target, "scroll", on_scroll));

    let on_resize = {
        let tracker = tracker.clone();
        let window = window.clone();
        let document = document.clone();
        move |_: web::Event| relayout(&window, &document, &tracker)
    };
    listeners.extend(Listener::new(target, "resize", on_resize));

    // Late images and fonts settle by `load`.
    let on_load = {
        let tracker = tracker.clone();
        let window = window.clone();
        let document = document.clone();
        move |_: web::Event| relayout(&window, &document, &tracker)
    };
    listeners.extend(Listener::new(target, "load", on_load));

    // Back/forward cache restores count as a fresh entry.
    let on_pageshow = {
        let tracker = tracker.clone();
        let window = window.clone();
        let document = document.clone();
        move |_: web::Event| {
            let mut t = tracker.borrow_mut();
            t.reset();
            let layout = dom::read_scroll_layout(&window, &document, t.config());
            t.set_layout(layout);
            t.observe(dom::scroll_offset(&window), origin.elapsed().as_secs_f64());
        }
    };
    listeners.extend(Listener::new(target, "pageshow", on_pageshow));

    let on_keydown = move |ev: web::Event| {
        let Some(key_ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if key_ev.repeat() || !style::is_confirm_key(&key_ev.key()) {
            return;
        }
        tracker.borrow_mut().confirm();
    };
    listeners.extend(Listener::new(target, "keydown", on_keydown));

    listeners
}

/// Re-measure the scroll regions whenever the body changes size, which also
/// covers content injected after start without a window resize.
pub fn watch_layout(
    window: &web::Window,
    document: &web::Document,
    tracker: Rc<RefCell<ScrollTracker>>,
) -> Option<ResizeWatch> {
    let body = document.body()?;
    let window = window.clone();
    let doc = document.clone();
    ResizeWatch::new(body.as_ref(), move || relayout(&window, &doc, &tracker))
}

fn relayout(window: &web::Window, document: &web::Document, tracker: &RefCell<ScrollTracker>) {
    let mut t = tracker.borrow_mut();
    let layout = dom::read_scroll_layout(window, document, t.config());
    t.set_layout(layout);
}
