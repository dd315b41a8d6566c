//! Three.js-shaped scene handles.
//!
//! Any JS object exposing `position`, `rotation` and `scale` members with a
//! `set(x, y, z)` method (e.g. a three.js `Object3D`) can be driven.

use anyhow::{anyhow, Context};
use glam::Vec3;
use js_sys::{Function, Reflect};
use volley_core::SceneNode;
use wasm_bindgen::{JsCast, JsValue};

struct Vec3Slot {
    target: JsValue,
    set: Function,
}

impl Vec3Slot {
    fn lookup(object: &JsValue, member: &str) -> anyhow::Result<Self> {
        let target = Reflect::get(object, &JsValue::from_str(member))
            .map_err(|e| anyhow!("{:?}", e))
            .with_context(|| format!("reading .{member}"))?;
        if target.is_undefined() || target.is_null() {
            return Err(anyhow!("object has no .{member}"));
        }
        let set = Reflect::get(&target, &JsValue::from_str("set"))
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<Function>()
            .map_err(|_| anyhow!(".{member}.set is not a function"))?;
        Ok(Self { target, set })
    }

    fn write(&self, v: Vec3) {
        let _ = self.set.call3(
            &self.target,
            &JsValue::from_f64(v.x as f64),
            &JsValue::from_f64(v.y as f64),
            &JsValue::from_f64(v.z as f64),
        );
    }
}

pub struct Object3dNode {
    position: Vec3Slot,
    rotation: Vec3Slot,
    scale: Vec3Slot,
}

impl Object3dNode {
    pub fn new(object: &JsValue) -> anyhow::Result<Self> {
        Ok(Self {
            position: Vec3Slot::lookup(object, "position")?,
            rotation: Vec3Slot::lookup(object, "rotation")?,
            scale: Vec3Slot::lookup(object, "scale")?,
        })
    }
}

impl SceneNode for Object3dNode {
    fn set_position(&mut self, position: Vec3) {
        self.position.write(position);
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation.write(rotation);
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale.write(scale);
    }
}
