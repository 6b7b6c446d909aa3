//! Occlusion module - per-region visibility scoring from landmark depth
//!
//! Re-exports only. All logic in submodules.

mod landmark;
mod regions;
mod head_turn;
mod estimator;

pub use landmark::{Landmark, NormRect};
pub use regions::{RegionKind, RegionSpec, regions_for, INDEX_LIST_REGIONS, LIBRARY_CONTOUR_REGIONS};
pub use head_turn::{head_turn_occlusion, NOSE_TIP, LEFT_CHEEK_EDGE, RIGHT_CHEEK_EDGE};
pub use estimator::{depth_confidence, OcclusionEstimator, OcclusionResult, RegionResult};
