//! JS-facing session handle
//!
//! Page glue owns one of these: it wires the webcam button, awaits
//! `setOptions` when a mode switch is reported, and drives
//! `predictWebcam` from `requestAnimationFrame` while `webcamRunning`.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element};

use crate::config::OcclusionConfig;
use crate::session::{FrameReport, OcclusionSession, RunningMode, VideoFrame};
use super::blend_shapes::render_blend_shapes;
use super::detector::{detection_from_js, JsDetector};

#[wasm_bindgen(js_name = OcclusionSession)]
pub struct WebSession {
    session: OcclusionSession,
    detector: JsDetector,
}

#[wasm_bindgen(js_class = OcclusionSession)]
impl WebSession {
    /// `detect_for_video(timestampMs)` must return the landmarker result;
    /// `config_json` overrides defaults field by field
    #[wasm_bindgen(constructor)]
    pub fn new(
        detect_for_video: js_sys::Function,
        config_json: Option<String>,
    ) -> Result<WebSession, JsValue> {
        let config = match config_json {
            Some(json) => OcclusionConfig::from_json(&json)?,
            None => OcclusionConfig::default(),
        };
        log::info!(
            "occlusion session ready (threshold {}%, fade {}ms)",
            config.occlusion_threshold,
            config.fade_duration_ms
        );
        Ok(WebSession {
            session: OcclusionSession::new(config),
            detector: JsDetector::new(detect_for_video),
        })
    }

    /// Returns the new button label
    #[wasm_bindgen(js_name = toggleWebcam)]
    pub fn toggle_webcam(&mut self) -> String {
        self.session.toggle_webcam().to_string()
    }

    #[wasm_bindgen(getter, js_name = webcamRunning)]
    pub fn webcam_running(&self) -> bool {
        self.session.should_continue()
    }

    #[wasm_bindgen(getter, js_name = runningMode)]
    pub fn running_mode(&self) -> String {
        self.session.mode().as_str().to_string()
    }

    /// True when the landmarker needs `setOptions({ runningMode: "VIDEO" })`
    #[wasm_bindgen(js_name = enterVideoMode)]
    pub fn enter_video_mode(&mut self) -> bool {
        self.session.enter_mode(RunningMode::Video)
    }

    /// True when the landmarker needs `setOptions({ runningMode: "IMAGE" })`
    #[wasm_bindgen(js_name = enterImageMode)]
    pub fn enter_image_mode(&mut self) -> bool {
        self.session.enter_mode(RunningMode::Image)
    }

    /// One animation frame of the webcam loop; returns the displayed percentage
    ///
    /// `timestamp_ms` is `performance.now()`; it is handed to
    /// `detectForVideo` and drives the fade deadline.
    #[wasm_bindgen(js_name = predictWebcam)]
    pub fn predict_webcam(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        blend_shapes: Option<Element>,
        current_time: f64,
        timestamp_ms: f64,
        width: f64,
        height: f64,
    ) -> Result<f32, JsValue> {
        let frame = VideoFrame {
            current_time,
            now_ms: timestamp_ms,
            width,
            height,
        };
        let mut surface = ctx.clone();
        let report = self.session.video_step(&mut self.detector, &mut surface, frame)?;
        Ok(finish(report, blend_shapes.as_ref()))
    }

    /// Overlay for a clicked image, given the result of `detect(image)`
    #[wasm_bindgen(js_name = analyzeImage)]
    pub fn analyze_image(
        &mut self,
        ctx: &CanvasRenderingContext2d,
        blend_shapes: Option<Element>,
        result: JsValue,
        width: f64,
        height: f64,
    ) -> Result<f32, JsValue> {
        let detection = detection_from_js(&result)?;
        let mut surface = ctx.clone();
        let report = self.session.analyze_image(&detection, &mut surface, (width, height))?;
        Ok(finish(report, blend_shapes.as_ref()))
    }
}

fn finish(report: FrameReport, blend_shapes: Option<&Element>) -> f32 {
    if let Some(element) = blend_shapes {
        render_blend_shapes(element, &report.blend_shapes);
    }
    report.occlusion_percentage
}
