//! Renderer module - meter and region overlays on a 2D surface
//!
//! Re-exports only. All logic in submodules.

mod commands;
mod landmark_overlay;
mod meter;
mod region_boxes;
mod display_state;
mod surface;

pub use commands::{colors, Color, DrawCommand, LinearGradient, Paint, Rect};
pub use landmark_overlay::build_landmark_overlay_commands;
pub use meter::{build_meter_commands, METER_HEIGHT, METER_WIDTH};
pub use region_boxes::{build_region_box_commands, ConfidenceBand};
pub use display_state::{DisplayState, FadeTimer, DEFAULT_FADE_MS};
pub use surface::{RecordingSurface, Surface};
