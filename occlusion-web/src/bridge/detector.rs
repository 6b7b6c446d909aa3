//! JS-backed face detector
//!
//! The landmarker lives in JavaScript. Its result object is plain data,
//! so it crosses the boundary as JSON and decodes with serde.

use wasm_bindgen::prelude::*;

use crate::detection::DetectionResult;
use crate::error::{describe_js, Error, Result};
use crate::session::FaceDetector;

/// Decode a landmarker result object
pub fn detection_from_js(value: &JsValue) -> Result<DetectionResult> {
    if value.is_undefined() || value.is_null() {
        return Ok(DetectionResult::default());
    }
    let json = js_sys::JSON::stringify(value)
        .map_err(|e| Error::Detector(describe_js(&e)))?;
    DetectionResult::from_json(&String::from(json))
}

/// Calls `detect(timestampMs)` on the JS side, e.g.
/// `(ts) => faceLandmarker.detectForVideo(video, ts)`
pub struct JsDetector {
    detect: js_sys::Function,
}

impl JsDetector {
    pub fn new(detect: js_sys::Function) -> Self {
        Self { detect }
    }
}

impl FaceDetector for JsDetector {
    fn detect_for_video(&mut self, timestamp_ms: f64) -> Result<DetectionResult> {
        let value = self
            .detect
            .call1(&JsValue::NULL, &JsValue::from_f64(timestamp_ms))
            .map_err(|e| Error::Detector(describe_js(&e)))?;
        detection_from_js(&value)
    }
}
