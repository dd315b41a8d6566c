// Pure formatting of the page effects; no web-sys so it can be tested on host.

use super::constants::{
    CONFIRM_KEYS, HEADER_INVERTED_CLASS, HEADER_SOLID_CLASS, REVEAL_DURATION_MS, REVEAL_OFFSET_PX,
};
use volley_core::{HeaderStyle, RevealEvent, Rgb};

#[inline]
pub fn css_rgb(color: Rgb) -> String {
    let [r, g, b] = color.to_u8();
    format!("rgb({r}, {g}, {b})")
}

/// Class to add and class to remove for a header style.
#[inline]
pub fn header_classes(style: HeaderStyle) -> (&'static str, &'static str) {
    match style {
        HeaderStyle::Inverted => (HEADER_INVERTED_CLASS, HEADER_SOLID_CLASS),
        HeaderStyle::Solid => (HEADER_SOLID_CLASS, HEADER_INVERTED_CLASS),
    }
}

/// Inline style declarations (property, value) for a content transition.
pub fn reveal_declarations(direction: RevealEvent) -> [(&'static str, String); 4] {
    let (opacity, offset, pointer) = match direction {
        RevealEvent::Show => ("1", 0.0, "auto"),
        RevealEvent::Hide => ("0", REVEAL_OFFSET_PX, "none"),
    };
    [
        (
            "transition",
            format!(
                "opacity {REVEAL_DURATION_MS}ms ease, transform {REVEAL_DURATION_MS}ms ease"
            ),
        ),
        ("opacity", opacity.to_string()),
        ("transform", format!("translate3d(0, {offset}px, 0)")),
        ("pointer-events", pointer.to_string()),
    ]
}

#[inline]
pub fn is_confirm_key(key: &str) -> bool {
    CONFIRM_KEYS.contains(&key)
}
