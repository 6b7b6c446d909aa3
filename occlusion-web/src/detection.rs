//! Detector output - the face landmarker's per-frame result
//!
//! Mirrors the JSON shape of the landmarker result object; unknown
//! fields (transformation matrices, visibility) are ignored.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::occlusion::Landmark;

/// One expression coefficient
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlendShapeCategory {
    pub category_name: String,
    pub display_name: String,
    pub score: f32,
}

impl BlendShapeCategory {
    /// Display name when the model provides one
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.category_name
        } else {
            &self.display_name
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Classifications {
    pub categories: Vec<BlendShapeCategory>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectionResult {
    /// One landmark sequence per detected face
    pub face_landmarks: Vec<Vec<Landmark>>,
    #[serde(rename = "faceBlendshapes")]
    pub face_blend_shapes: Vec<Classifications>,
}

impl DetectionResult {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::Decode {
            what: "detection result",
            source,
        })
    }

    /// Landmarks of the first face, if any face was found
    pub fn primary_face(&self) -> Option<&[Landmark]> {
        self.face_landmarks
            .first()
            .map(Vec::as_slice)
            .filter(|lms| !lms.is_empty())
    }

    /// Blend shapes of the first face (empty when not requested)
    pub fn primary_blend_shapes(&self) -> &[BlendShapeCategory] {
        self.face_blend_shapes
            .first()
            .map(|c| c.categories.as_slice())
            .unwrap_or(&[])
    }
}
