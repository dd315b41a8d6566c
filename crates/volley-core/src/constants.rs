use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6, PI, TAU};

// Shared choreography tuning constants used by the web frontend and the native harness.

// Damping
pub const META_LAMBDA: f32 = 2.0; // smooths raw scroll progress before choreography
pub const FIELD_LAMBDA: f32 = 10.0; // smooths every transform component
pub const MAX_FRAME_DT: f32 = 1.0 / 15.0; // seconds; guards against tab-resume spikes

// Scroll tracker
pub const HIT_PROGRESS_THRESHOLD: f32 = 0.6; // hit latches once progress passes this
pub const CONFIRM_MIN_PROGRESS: f32 = 0.4; // manual confirm accepted only past this
pub const VELOCITY_IDLE_SEC: f64 = 0.1; // no scroll sample for this long means the page is at rest

// Phase boundaries (smoothed progress)
pub const INTRO_END: f32 = 0.5;
pub const BALL_DESCENT_START: f32 = 0.35;
pub const HIT_END: f32 = 0.75;
pub const HIT_PREP_SPLIT: f32 = 0.4; // inner hit fraction where prep turns into swing
pub const SHOWCASE_REVEAL_SPAN: f32 = 0.12; // progress consumed by the showcase reveal

// Showcase stages (content progress)
pub const STAGE_TRACK_START: f32 = 0.33;
pub const STAGE_DETAIL_START: f32 = 0.66;

// Racket motion
pub const RACKET_INTRO_ROT_START: f32 = TAU; // one full turn wound up, seen from the side
pub const RACKET_INTRO_ROT_END: f32 = -FRAC_PI_2;
pub const RACKET_INTRO_Z_START: f32 = -0.6;
pub const RACKET_INTRO_Z_END: f32 = -10.0;
pub const RACKET_PREP_BACKSWING: f32 = -FRAC_PI_6; // extra -30° before the swing
pub const RACKET_SWING_END_ROT: f32 = -FRAC_PI_2;
pub const RACKET_SWING_TWIST: f32 = 0.35; // y-axis wobble peaking mid-swing
pub const RACKET_REVEAL_TURN: f32 = PI; // final half turn to stand upright
pub const RACKET_SIDE_X: f32 = 1.6; // where the reveal parks the racket
pub const RACKET_SCALE: f32 = 1.0;

// Showcase stage 1: zoom on the racket head
pub const FOCUS_Y: f32 = -1.4;
pub const FOCUS_Z: f32 = -5.0;

// Showcase stages 2/3: section tracking
pub const TRACK_ANCHOR_Y: f32 = -1.4; // world Y when the section is centered in the viewport
pub const TRACK_FALLBACK_END_Y: f32 = 2.6; // lerp target when the section is missing
pub const DETAIL_TURN: f32 = FRAC_PI_2; // y-axis turn across stage 3

// Idle float
pub const IDLE_FLOAT_AMPLITUDE: f32 = 0.06;
pub const IDLE_FLOAT_HZ: f32 = 0.2;

// Ball motion
pub const BALL_SCALE: f32 = 0.2;
pub const BALL_START: Vec3 = Vec3::new(0.0, 10.0, 0.0);
pub const BALL_IMPACT: Vec3 = Vec3::new(0.0, -3.0, -9.5);
pub const BALL_FLY_TARGET: Vec3 = Vec3::new(0.4, 0.6, 3.5); // just short of the camera
pub const BALL_DESCENT_SPIN: f32 = 2.0 * TAU;
pub const BALL_HIT_SPIN: f32 = 3.0 * TAU;
pub const BALL_MAX_SCALE_MULTIPLIER: f32 = 40.0; // screen-filling proximity
pub const BALL_HIDE_SWING: f32 = 0.7;

// Background and header
pub const BG_FADE_START: f32 = 0.55;
pub const BG_FADE_END: f32 = 0.8;
pub const DARK_BG: [f32; 3] = [0.039, 0.039, 0.047];
pub const LIGHT_BG: [f32; 3] = [0.961, 0.957, 0.945];

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
