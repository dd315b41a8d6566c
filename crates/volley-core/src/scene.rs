//! Scene-side types shared with the front-ends.
//!
//! These types avoid platform-specific APIs. The web frontend forwards
//! [`EntityTransform`]s to three.js objects; the native harness logs them.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Position, XYZ Euler rotation (radians) and scale of one animated entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityTransform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for EntityTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl EntityTransform {
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Same placement, zero scale.
    pub fn hidden(position: Vec3, rotation: Vec3) -> Self {
        Self::new(position, rotation, Vec3::ZERO)
    }

    pub fn is_hidden(&self) -> bool {
        self.scale == Vec3::ZERO
    }

    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Handle to one node of the external scene graph.
pub trait SceneNode {
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, rotation: Vec3);
    fn set_scale(&mut self, scale: Vec3);

    fn apply(&mut self, transform: &EntityTransform) {
        self.set_position(transform.position);
        self.set_rotation(transform.rotation);
        self.set_scale(transform.scale);
    }
}

/// Perspective camera on the Z axis at `eye_z`, looking down -Z. Only the
/// vertical field of view matters for pixel-to-world calibration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye_z: f32,
    pub fovy_radians: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye_z: crate::constants::CAMERA_Z,
            fovy_radians: crate::constants::CAMERA_FOV_Y_DEG.to_radians(),
        }
    }
}

impl Camera {
    /// Height of the visible frustum slice at world depth `z`.
    pub fn visible_height_at(&self, z: f32) -> f32 {
        visible_world_height(self.fovy_radians, self.eye_z - z)
    }

    /// World units spanned by one CSS pixel at world depth `z`.
    pub fn world_units_per_pixel(&self, z: f32, viewport_height_px: f32) -> f32 {
        world_units_per_pixel(self.fovy_radians, self.eye_z - z, viewport_height_px)
    }
}

/// Visible world height of a perspective frustum at `distance` from the eye.
#[inline]
pub fn visible_world_height(fovy_radians: f32, distance: f32) -> f32 {
    2.0 * (fovy_radians * 0.5).tan() * distance.max(0.0)
}

#[inline]
pub fn world_units_per_pixel(fovy_radians: f32, distance: f32, viewport_height_px: f32) -> f32 {
    if viewport_height_px.is_nan() || viewport_height_px <= 0.0 {
        return 0.0;
    }
    visible_world_height(fovy_radians, distance) / viewport_height_px
}
