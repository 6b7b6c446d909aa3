//! Landmark point and normalized rectangle

use serde::{Deserialize, Deserializer};

/// A single 3D face landmark (normalized coordinates)
///
/// Smaller (more negative) `z` is closer to the camera. `JSON.stringify`
/// writes NaN as `null`; such coordinates decode back to NaN so the point
/// is unresolvable instead of failing the whole result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    #[serde(deserialize_with = "nan_if_null")]
    pub x: f32, // 0-1 normalized
    #[serde(deserialize_with = "nan_if_null")]
    pub y: f32, // 0-1 normalized
    #[serde(default, deserialize_with = "nan_if_null")]
    pub z: f32, // Relative depth
}

fn nan_if_null<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or(f32::NAN))
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Axis-aligned rectangle in normalized frame coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl NormRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle containing every point
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Landmark>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for lm in iter {
            min_x = min_x.min(lm.x);
            min_y = min_y.min(lm.y);
            max_x = max_x.max(lm.x);
            max_y = max_y.max(lm.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_rect() {
        let points = [
            Landmark::new(0.2, 0.4, 0.0),
            Landmark::new(0.3, 0.35, 0.0),
            Landmark::new(0.25, 0.5, 0.0),
        ];
        let rect = NormRect::enclosing(points.iter()).unwrap();
        assert!((rect.x - 0.2).abs() < 1e-6);
        assert!((rect.y - 0.35).abs() < 1e-6);
        assert!((rect.width - 0.1).abs() < 1e-6);
        assert!((rect.height - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_enclosing_empty() {
        assert!(NormRect::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn test_missing_z_defaults_to_zero() {
        let lm: Landmark = serde_json::from_str(r#"{"x": 0.5, "y": 0.25, "visibility": 0}"#).unwrap();
        assert_eq!(lm, Landmark::new(0.5, 0.25, 0.0));
    }

    #[test]
    fn test_null_coordinate_is_unresolvable() {
        let lm: Landmark = serde_json::from_str(r#"{"x": 0.1, "y": null, "z": null}"#).unwrap();
        assert_eq!(lm.x, 0.1);
        assert!(lm.y.is_nan());
        assert!(lm.z.is_nan());
        assert!(!lm.is_finite());
    }
}
