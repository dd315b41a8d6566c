// DOM hooks and page-effect tuning used by the web frontend.

// Element ids (overridable through Stage options)
pub const DEFAULT_HEADER_ID: &str = "site-header";
pub const DEFAULT_REVEAL_ID: &str = "content-reveal";

// Header contrast classes toggled on the header element
pub const HEADER_INVERTED_CLASS: &str = "header--inverted";
pub const HEADER_SOLID_CLASS: &str = "header--solid";

// Content reveal transition
pub const REVEAL_DURATION_MS: u32 = 600;
pub const REVEAL_OFFSET_PX: f32 = 40.0; // hidden content sits this far below its slot

// Keys accepted as the manual "confirm" trigger
pub const CONFIRM_KEYS: [&str; 2] = ["Enter", " "];

// Attribute set on <body> once the hit has latched
pub const HIT_ATTRIBUTE: &str = "data-hit";
