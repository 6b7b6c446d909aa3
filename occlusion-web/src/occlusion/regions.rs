//! Facial region definitions (Face Mesh 468/478 landmark layout)

use crate::config::RegionSource;
use super::landmark::NormRect;

/// Named facial feature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    LeftEye,
    RightEye,
    LeftEyebrow,
    RightEyebrow,
    Nose,
    Mouth,
    LeftCheek,
    RightCheek,
}

impl RegionKind {
    pub fn name(&self) -> &'static str {
        match self {
            RegionKind::LeftEye => "leftEye",
            RegionKind::RightEye => "rightEye",
            RegionKind::LeftEyebrow => "leftEyebrow",
            RegionKind::RightEyebrow => "rightEyebrow",
            RegionKind::Nose => "nose",
            RegionKind::Mouth => "mouth",
            RegionKind::LeftCheek => "leftCheek",
            RegionKind::RightCheek => "rightCheek",
        }
    }

    /// Fixed box for a roughly centered, frontal face (image-left = "left")
    pub fn fixed_layout(&self) -> NormRect {
        match self {
            RegionKind::LeftEye => NormRect::new(0.28, 0.32, 0.16, 0.08),
            RegionKind::RightEye => NormRect::new(0.56, 0.32, 0.16, 0.08),
            RegionKind::LeftEyebrow => NormRect::new(0.27, 0.24, 0.18, 0.06),
            RegionKind::RightEyebrow => NormRect::new(0.55, 0.24, 0.18, 0.06),
            RegionKind::Nose => NormRect::new(0.43, 0.38, 0.14, 0.20),
            RegionKind::Mouth => NormRect::new(0.37, 0.62, 0.26, 0.10),
            RegionKind::LeftCheek => NormRect::new(0.22, 0.45, 0.16, 0.14),
            RegionKind::RightCheek => NormRect::new(0.62, 0.45, 0.16, 0.14),
        }
    }
}

/// A region and the landmark indices that sample it
#[derive(Clone, Copy, Debug)]
pub struct RegionSpec {
    pub kind: RegionKind,
    pub indices: &'static [usize],
}

/// Hand-picked sample points per feature
pub const INDEX_LIST_REGIONS: [RegionSpec; 6] = [
    RegionSpec { kind: RegionKind::LeftEye, indices: &[33, 7, 163, 144, 145, 153, 154, 155, 133] },
    RegionSpec { kind: RegionKind::RightEye, indices: &[362, 382, 381, 380, 374, 373, 390, 249, 263] },
    RegionSpec { kind: RegionKind::Nose, indices: &[1, 2, 3, 4, 5, 6, 168, 197, 195] },
    RegionSpec { kind: RegionKind::Mouth, indices: &[61, 185, 40, 39, 37, 0, 267, 269, 270, 409] },
    RegionSpec { kind: RegionKind::LeftCheek, indices: &[203, 123, 66, 107, 105, 47] },
    RegionSpec { kind: RegionKind::RightCheek, indices: &[423, 351, 427, 280, 411, 337] },
];

/// Unique vertices of the face landmarker's published contour connections
///
/// Named by image side to match `INDEX_LIST_REGIONS` (the library's
/// RIGHT_EYE contour sits on the image left).
pub const LIBRARY_CONTOUR_REGIONS: [RegionSpec; 6] = [
    RegionSpec {
        kind: RegionKind::LeftEye,
        indices: &[33, 7, 163, 144, 145, 153, 154, 155, 133, 246, 161, 160, 159, 158, 157, 173],
    },
    RegionSpec {
        kind: RegionKind::RightEye,
        indices: &[263, 249, 390, 373, 374, 380, 381, 382, 362, 466, 388, 387, 386, 385, 384, 398],
    },
    RegionSpec {
        kind: RegionKind::LeftEyebrow,
        indices: &[46, 53, 52, 65, 55, 70, 63, 105, 66, 107],
    },
    RegionSpec {
        kind: RegionKind::RightEyebrow,
        indices: &[276, 283, 282, 295, 285, 300, 293, 334, 296, 336],
    },
    RegionSpec {
        kind: RegionKind::Nose,
        indices: &[168, 6, 197, 195, 5, 4, 1, 19, 94, 2, 98, 97, 326, 327, 294, 278, 344, 440, 275, 45, 220, 115, 48, 64],
    },
    RegionSpec {
        kind: RegionKind::Mouth,
        indices: &[
            61, 146, 91, 181, 84, 17, 314, 405, 321, 375, 291, 185, 40, 39, 37, 0, 267, 269, 270,
            409, 78, 95, 88, 178, 87, 14, 317, 402, 318, 324, 308, 191, 80, 81, 82, 13, 312, 311,
            310, 415,
        ],
    },
];

pub fn regions_for(source: RegionSource) -> &'static [RegionSpec] {
    match source {
        RegionSource::IndexList => &INDEX_LIST_REGIONS,
        RegionSource::LibraryContours => &LIBRARY_CONTOUR_REGIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_fit_face_mesh() {
        for spec in INDEX_LIST_REGIONS.iter().chain(LIBRARY_CONTOUR_REGIONS.iter()) {
            assert!(!spec.indices.is_empty(), "{} has no indices", spec.kind.name());
            assert!(spec.indices.iter().all(|&i| i < 468), "{} out of range", spec.kind.name());
        }
    }

    #[test]
    fn test_fixed_layout_inside_frame() {
        for spec in INDEX_LIST_REGIONS.iter().chain(LIBRARY_CONTOUR_REGIONS.iter()) {
            let r = spec.kind.fixed_layout();
            assert!(r.x >= 0.0 && r.y >= 0.0);
            assert!(r.x + r.width <= 1.0 && r.y + r.height <= 1.0);
        }
    }
}
