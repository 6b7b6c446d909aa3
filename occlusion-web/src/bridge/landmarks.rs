//! Flat landmark buffers from JavaScript
//!
//! JS can hand over a face as a Float32Array of x, y, z triples
//! (468 or 478 points) instead of the full result object.

use wasm_bindgen::prelude::*;

use crate::error::{Error, Result};
use crate::occlusion::{Landmark, OcclusionEstimator};

/// Decode x, y, z triples
pub fn landmarks_from_flat(data: &[f32]) -> Result<Vec<Landmark>> {
    if data.len() % 3 != 0 {
        return Err(Error::LandmarkBufferLength(data.len()));
    }
    Ok(data
        .chunks_exact(3)
        .map(|c| Landmark::new(c[0], c[1], c[2]))
        .collect())
}

/// Stateless estimate with default settings; returns occlusion percentage
#[wasm_bindgen]
pub fn estimate_occlusion(data: &[f32]) -> std::result::Result<f32, JsValue> {
    let landmarks = landmarks_from_flat(data)?;
    Ok(OcclusionEstimator::default().estimate(&landmarks).occlusion_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_decode() {
        let landmarks = landmarks_from_flat(&[0.1, 0.2, 0.3, 0.4, 0.5, -0.6]).unwrap();
        assert_eq!(landmarks, vec![Landmark::new(0.1, 0.2, 0.3), Landmark::new(0.4, 0.5, -0.6)]);
    }

    #[test]
    fn test_flat_decode_rejects_partial_triple() {
        let err = landmarks_from_flat(&[0.1, 0.2, 0.3, 0.4]).unwrap_err();
        assert!(matches!(err, Error::LandmarkBufferLength(4)));
    }

    #[test]
    fn test_empty_buffer_is_empty_face() {
        assert!(landmarks_from_flat(&[]).unwrap().is_empty());
    }
}
