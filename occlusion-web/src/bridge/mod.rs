//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod blend_shapes;
mod detector;
mod session;

pub use landmarks::{estimate_occlusion, landmarks_from_flat};
pub use blend_shapes::blend_shapes_html;
pub use session::WebSession;
