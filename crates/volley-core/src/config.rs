//! Runtime configuration for the tracker, the choreography and the driver.
//!
//! Defaults come from [`crate::constants`]; front-ends override individual
//! fields and must call `validate` before handing a config to the core.

use crate::constants::*;
use crate::scene::Camera;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("field of view must lie in (0, π) radians, got {0}")]
    FieldOfView(f32),
    #[error("working depth {depth} is not in front of the camera at z={eye_z}")]
    BehindCamera { depth: f32, eye_z: f32 },
    #[error("{0} must not be empty")]
    EmptyId(&'static str),
    #[error("threshold {name}={value} must lie in [0, 1]")]
    Threshold { name: &'static str, value: f32 },
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn unit(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Threshold { name, value })
    }
}

fn non_empty(name: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyId(name))
    } else {
        Ok(())
    }
}

/// Page regions observed by the scroll tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    pub intro_id: String,
    pub content_id: String,
    pub hit_progress: f32,
    pub confirm_min_progress: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            intro_id: "intro".to_string(),
            content_id: "content".to_string(),
            hit_progress: HIT_PROGRESS_THRESHOLD,
            confirm_min_progress: CONFIRM_MIN_PROGRESS,
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("intro_id", &self.intro_id)?;
        non_empty("content_id", &self.content_id)?;
        unit("hit_progress", self.hit_progress)?;
        unit("confirm_min_progress", self.confirm_min_progress)?;
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct ChoreographyConfig {
    pub camera: Camera,
    /// World Z the racket sits at while sections are tracked.
    pub working_depth: f32,
    /// Section tracked during showcase stage 2.
    pub track_section_id: String,
    /// Section tracked during showcase stage 3.
    pub detail_section_id: String,
    pub anchor_y: f32,
    pub idle_amplitude: f32,
}

impl Default for ChoreographyConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            working_depth: FOCUS_Z,
            track_section_id: "feature-grip".to_string(),
            detail_section_id: "feature-frame".to_string(),
            anchor_y: TRACK_ANCHOR_Y,
            idle_amplitude: IDLE_FLOAT_AMPLITUDE,
        }
    }
}

impl ChoreographyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fov = self.camera.fovy_radians;
        if !(fov.is_finite() && fov > 0.0 && fov < std::f32::consts::PI) {
            return Err(ConfigError::FieldOfView(fov));
        }
        if !(self.working_depth.is_finite() && self.working_depth < self.camera.eye_z) {
            return Err(ConfigError::BehindCamera {
                depth: self.working_depth,
                eye_z: self.camera.eye_z,
            });
        }
        non_empty("track_section_id", &self.track_section_id)?;
        non_empty("detail_section_id", &self.detail_section_id)?;
        if !(self.idle_amplitude.is_finite() && self.idle_amplitude >= 0.0) {
            return Err(ConfigError::NotPositive {
                name: "idle_amplitude",
                value: self.idle_amplitude,
            });
        }
        Ok(())
    }

    /// World units per CSS pixel at the working depth.
    pub fn world_units_per_pixel(&self, viewport_height_px: f32) -> f32 {
        self.camera
            .world_units_per_pixel(self.working_depth, viewport_height_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverParams {
    pub meta_lambda: f32,
    pub field_lambda: f32,
    pub max_dt: f32,
}

impl Default for DriverParams {
    fn default() -> Self {
        Self {
            meta_lambda: META_LAMBDA,
            field_lambda: FIELD_LAMBDA,
            max_dt: MAX_FRAME_DT,
        }
    }
}

impl DriverParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("meta_lambda", self.meta_lambda)?;
        positive("field_lambda", self.field_lambda)?;
        positive("max_dt", self.max_dt)?;
        Ok(())
    }
}
