//! Scroll-driven choreography for the volley hero scene.
//!
//! Scroll offsets go into a [`ScrollTracker`]; once per render tick the
//! [`FrameDriver`] smooths the published progress, asks the [`Choreography`]
//! for target poses and pushes the damped result to two [`SceneNode`]s and the
//! surrounding [`PageLayer`]. Everything here is platform independent.

pub mod choreography;
pub mod config;
pub mod constants;
pub mod damped;
pub mod driver;
pub mod latch;
pub mod math;
pub mod scene;
pub mod scroll;

pub use choreography::*;
pub use config::*;
pub use constants::*;
pub use damped::*;
pub use driver::*;
pub use latch::*;
pub use math::*;
pub use scene::*;
pub use scroll::*;
