// Host-side tests for the page-effect formatting helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;
use volley_core::{HeaderStyle, RevealEvent, Rgb, DARK_BG, LIGHT_BG};

#[test]
fn css_rgb_quantizes_channels() {
    assert_eq!(css_rgb(Rgb::new(0.0, 0.5, 1.0)), "rgb(0, 128, 255)");
    assert_eq!(css_rgb(Rgb::from_array(DARK_BG)), "rgb(10, 10, 12)");
    assert_eq!(css_rgb(Rgb::from_array(LIGHT_BG)), "rgb(245, 244, 241)");
}

#[test]
fn header_classes_swap() {
    assert_eq!(
        header_classes(HeaderStyle::Inverted),
        (HEADER_INVERTED_CLASS, HEADER_SOLID_CLASS)
    );
    assert_eq!(
        header_classes(HeaderStyle::Solid),
        (HEADER_SOLID_CLASS, HEADER_INVERTED_CLASS)
    );
}

#[test]
fn reveal_show_and_hide_are_opposites() {
    let show = reveal_declarations(RevealEvent::Show);
    let hide = reveal_declarations(RevealEvent::Hide);
    let get = |decls: &[(&str, String)], key: &str| {
        decls
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
            .unwrap()
    };
    assert_eq!(get(&show, "opacity"), "1");
    assert_eq!(get(&hide, "opacity"), "0");
    assert_eq!(get(&show, "transform"), "translate3d(0, 0px, 0)");
    assert_eq!(get(&hide, "transform"), "translate3d(0, 40px, 0)");
    assert_eq!(get(&hide, "pointer-events"), "none");
    assert_eq!(get(&show, "transition"), get(&hide, "transition"));
}

#[test]
fn only_enter_and_space_confirm() {
    assert!(is_confirm_key("Enter"));
    assert!(is_confirm_key(" "));
    assert!(!is_confirm_key("a"));
    assert!(!is_confirm_key("Escape"));
}
