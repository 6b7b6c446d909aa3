//! Face Occlusion Web - occlusion meter for browser face-landmark demos
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Console bindings and the start hook
//!
//! The landmark detector itself runs in JavaScript; this crate scores
//! its output and paints the overlay.

mod bridge;
mod config;
mod detection;
mod error;
mod logging;
mod occlusion;
mod renderer;
mod session;

use wasm_bindgen::prelude::*;

pub use bridge::{blend_shapes_html, estimate_occlusion, landmarks_from_flat, WebSession};
pub use config::{BoxLayout, DepthScoring, EmptyInputPolicy, HeadTurnConfig, OcclusionConfig, RegionSource};
pub use detection::{BlendShapeCategory, Classifications, DetectionResult};
pub use error::{Error, Result};
pub use occlusion::{
    depth_confidence, head_turn_occlusion, regions_for, Landmark, NormRect, OcclusionEstimator,
    OcclusionResult, RegionKind, RegionResult, RegionSpec, INDEX_LIST_REGIONS,
    LEFT_CHEEK_EDGE, LIBRARY_CONTOUR_REGIONS, NOSE_TIP, RIGHT_CHEEK_EDGE,
};
pub use renderer::{
    build_landmark_overlay_commands, build_meter_commands, build_region_box_commands, colors, Color, ConfidenceBand, DisplayState,
    DrawCommand, FadeTimer, LinearGradient, Paint, RecordingSurface, Rect, Surface,
    DEFAULT_FADE_MS, METER_HEIGHT, METER_WIDTH,
};
pub use session::{
    FaceDetector, FrameReport, OcclusionSession, RunningMode, VideoFrame, DISABLE_LABEL, ENABLE_LABEL,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Raise or lower console verbosity ("error" .. "trace")
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> std::result::Result<(), JsValue> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {}", level)))?;
    log::set_max_level(filter);
    Ok(())
}
