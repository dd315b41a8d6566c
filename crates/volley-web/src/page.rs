//! DOM-backed [`PageLayer`]: section metrics, background, header and the
//! content reveal.

use crate::dom;
use crate::style;
use fnv::FnvHashMap;
use std::cell::RefCell;
use volley_core::{HeaderStyle, PageLayer, RevealEvent, Rgb, SectionRect};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct DomPageLayer {
    window: web::Window,
    document: web::Document,
    body: Option<web::HtmlElement>,
    header: Option<web::Element>,
    reveal: Option<web::HtmlElement>,
    sections: RefCell<FnvHashMap<String, web::Element>>,
    last_background: Option<[u8; 3]>,
}

impl DomPageLayer {
    pub fn new(
        window: web::Window,
        document: web::Document,
        header_id: &str,
        reveal_id: &str,
    ) -> Self {
        let header = document.get_element_by_id(header_id);
        if header.is_none() {
            log::warn!("[page] #{} not found; header contrast disabled", header_id);
        }
        let reveal = document
            .get_element_by_id(reveal_id)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if reveal.is_none() {
            log::warn!("[page] #{} not found; content reveal disabled", reveal_id);
        }
        Self {
            body: document.body(),
            window,
            document,
            header,
            reveal,
            sections: RefCell::new(FnvHashMap::default()),
            last_background: None,
        }
    }

    /// Cached lookup; re-queries when the element was detached or never found.
    fn section(&self, id: &str) -> Option<web::Element> {
        if let Some(el) = self.sections.borrow().get(id) {
            if el.is_connected() {
                return Some(el.clone());
            }
        }
        let el = self.document.get_element_by_id(id)?;
        self.sections.borrow_mut().insert(id.to_string(), el.clone());
        Some(el)
    }

    pub fn mark_hit(&self) {
        if let Some(body) = &self.body {
            let _ = body.set_attribute(crate::constants::HIT_ATTRIBUTE, "1");
        }
    }
}

impl PageLayer for DomPageLayer {
    fn section_rect(&self, id: &str) -> Option<SectionRect> {
        self.section(id).map(|el| dom::section_rect(&el))
    }

    fn viewport_height(&self) -> f32 {
        dom::viewport_height(&self.window)
    }

    fn set_background(&mut self, color: Rgb) {
        let quantized = color.to_u8();
        if self.last_background == Some(quantized) {
            return;
        }
        if let Some(body) = &self.body {
            let _ = body
                .style()
                .set_property("background-color", &style::css_rgb(color));
            self.last_background = Some(quantized);
        }
    }

    fn set_header_style(&mut self, header_style: HeaderStyle) {
        if let Some(header) = &self.header {
            let (add, remove) = style::header_classes(header_style);
            let classes = header.class_list();
            let _ = classes.remove_1(remove);
            let _ = classes.add_1(add);
        }
    }

    fn transition_content(&mut self, direction: RevealEvent) {
        if let Some(el) = &self.reveal {
            let css = el.style();
            for (property, value) in style::reveal_declarations(direction) {
                let _ = css.set_property(property, &value);
            }
            let _ = el.set_attribute(
                "aria-hidden",
                if direction == RevealEvent::Hide { "true" } else { "false" },
            );
        }
    }
}
