//! Head-turn estimate - nose tip offset from the cheek midpoint

use super::landmark::Landmark;

pub const NOSE_TIP: usize = 4;
pub const LEFT_CHEEK_EDGE: usize = 234;
pub const RIGHT_CHEEK_EDGE: usize = 454;

/// Occlusion percentage (0-100) implied by horizontal head turn
///
/// Returns `None` when any of the three anchor points is missing or
/// non-finite, so the caller falls back to the region score alone.
pub fn head_turn_occlusion(landmarks: &[Landmark], gain: f32) -> Option<f32> {
    let nose = landmarks.get(NOSE_TIP).filter(|lm| lm.is_finite())?;
    let left = landmarks.get(LEFT_CHEEK_EDGE).filter(|lm| lm.is_finite())?;
    let right = landmarks.get(RIGHT_CHEEK_EDGE).filter(|lm| lm.is_finite())?;

    let center_x = (left.x + right.x) / 2.0;
    let offset = (nose.x - center_x).abs();

    Some((offset * gain).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(nose_x: f32) -> Vec<Landmark> {
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); 468];
        landmarks[NOSE_TIP].x = nose_x;
        landmarks[LEFT_CHEEK_EDGE].x = 0.3;
        landmarks[RIGHT_CHEEK_EDGE].x = 0.7;
        landmarks
    }

    #[test]
    fn test_frontal_face() {
        let score = head_turn_occlusion(&face(0.5), 800.0).unwrap();
        assert!(score.abs() < 1e-3);
    }

    #[test]
    fn test_turned_face() {
        // 0.05 offset * 800 = 40%
        let score = head_turn_occlusion(&face(0.55), 800.0).unwrap();
        assert!((score - 40.0).abs() < 0.1);
    }

    #[test]
    fn test_saturates_at_100() {
        let score = head_turn_occlusion(&face(0.69), 800.0).unwrap();
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_needs_cheek_points() {
        let short = vec![Landmark::default(); 200];
        assert!(head_turn_occlusion(&short, 800.0).is_none());
    }
}
