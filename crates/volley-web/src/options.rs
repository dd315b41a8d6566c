//! Stage options read from a plain JS object, e.g.
//! `{ introId: "hero", fieldLambda: 12 }`. Unknown keys are ignored.

use crate::constants::{DEFAULT_HEADER_ID, DEFAULT_REVEAL_ID};
use anyhow::Context;
use js_sys::Reflect;
use volley_core::{ChoreographyConfig, DriverParams, TrackerConfig};
use wasm_bindgen::JsValue;

#[derive(Clone, Debug)]
pub struct StageOptions {
    pub tracker: TrackerConfig,
    pub choreography: ChoreographyConfig,
    pub driver: DriverParams,
    pub header_id: String,
    pub reveal_id: String,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            choreography: ChoreographyConfig::default(),
            driver: DriverParams::default(),
            header_id: DEFAULT_HEADER_ID.to_string(),
            reveal_id: DEFAULT_REVEAL_ID.to_string(),
        }
    }
}

fn field(options: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn string(options: &JsValue, key: &str) -> Option<String> {
    field(options, key).and_then(|v| v.as_string())
}

fn number(options: &JsValue, key: &str) -> Option<f32> {
    field(options, key).and_then(|v| v.as_f64()).map(|v| v as f32)
}

impl StageOptions {
    pub fn from_js(options: &JsValue) -> anyhow::Result<Self> {
        let mut opts = Self::default();
        if options.is_object() {
            if let Some(v) = string(options, "introId") {
                opts.tracker.intro_id = v;
            }
            if let Some(v) = string(options, "contentId") {
                opts.tracker.content_id = v;
            }
            if let Some(v) = string(options, "headerId") {
                opts.header_id = v;
            }
            if let Some(v) = string(options, "revealId") {
                opts.reveal_id = v;
            }
            if let Some(v) = string(options, "trackSectionId") {
                opts.choreography.track_section_id = v;
            }
            if let Some(v) = string(options, "detailSectionId") {
                opts.choreography.detail_section_id = v;
            }
            if let Some(v) = number(options, "fovDegrees") {
                opts.choreography.camera.fovy_radians = v.to_radians();
            }
            if let Some(v) = number(options, "metaLambda") {
                opts.driver.meta_lambda = v;
            }
            if let Some(v) = number(options, "fieldLambda") {
                opts.driver.field_lambda = v;
            }
        }
        opts.tracker.validate().context("invalid tracker options")?;
        opts.choreography
            .validate()
            .context("invalid choreography options")?;
        opts.driver.validate().context("invalid driver options")?;
        Ok(opts)
    }
}
