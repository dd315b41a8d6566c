use volley_core::{ScrollLayout, ScrollRegion, SectionRect, TrackerConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM event listener that removes itself from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::error!("failed to attach {} listener: {:?}", kind, e);
                None
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// ResizeObserver on one element; disconnects when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn new(element: &web::Element, mut handler: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::wrap(
            Box::new(move |_entries: js_sys::Array| handler()) as Box<dyn FnMut(js_sys::Array)>
        );
        match web::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(element);
                Some(Self {
                    observer,
                    _callback: callback,
                })
            }
            Err(e) => {
                log::warn!("ResizeObserver unavailable: {:?}", e);
                None
            }
        }
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn document_height(document: &web::Document) -> f32 {
    document
        .document_element()
        .map(|el| el.scroll_height() as f32)
        .unwrap_or(0.0)
}

/// Viewport-relative rectangle of an element.
#[inline]
pub fn section_rect(element: &web::Element) -> SectionRect {
    let rect = element.get_bounding_client_rect();
    SectionRect {
        top: rect.top() as f32,
        height: rect.height() as f32,
    }
}

/// Document-relative extent of an element (bounding rect + current scroll).
pub fn scroll_region(window: &web::Window, element: &web::Element) -> ScrollRegion {
    let rect = section_rect(element);
    ScrollRegion::new(rect.top + scroll_offset(window), rect.height)
}

pub fn read_scroll_layout(
    window: &web::Window,
    document: &web::Document,
    config: &TrackerConfig,
) -> ScrollLayout {
    let region = |id: &str| {
        document
            .get_element_by_id(id)
            .map(|el| scroll_region(window, &el))
    };
    ScrollLayout {
        intro: region(&config.intro_id),
        content: region(&config.content_id),
        viewport_height: viewport_height(window),
        document_height: document_height(document),
    }
}
