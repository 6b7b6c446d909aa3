//! Bounds invariants of the estimator over arbitrary landmark sets

use face_occlusion_web::{
    DepthScoring, Landmark, OcclusionConfig, OcclusionEstimator, RegionSource,
};
use proptest::prelude::*;

fn landmark() -> impl Strategy<Value = Landmark> {
    (-0.5f32..1.5, -0.5f32..1.5, prop_oneof![-2.0f32..2.0, Just(f32::NAN), Just(f32::INFINITY)])
        .prop_map(|(x, y, z)| Landmark::new(x, y, z))
}

fn config() -> impl Strategy<Value = OcclusionConfig> {
    (
        prop_oneof![Just(RegionSource::IndexList), Just(RegionSource::LibraryContours)],
        prop_oneof![Just(DepthScoring::Mean), Just(DepthScoring::MeanWithVisibleRatio)],
        0.0f32..=100.0,
        any::<bool>(),
    )
        .prop_map(|(region_source, depth_scoring, occlusion_threshold, head_turn)| {
            let defaults = OcclusionConfig::default();
            OcclusionConfig {
                region_source,
                depth_scoring,
                occlusion_threshold,
                head_turn: if head_turn { defaults.head_turn } else { None },
                ..defaults
            }
        })
}

proptest! {
    #[test]
    fn percentage_in_bounds_and_flag_consistent(
        config in config(),
        landmarks in prop::collection::vec(landmark(), 0..480),
    ) {
        let threshold = config.occlusion_threshold;
        let result = OcclusionEstimator::new(config).estimate(&landmarks);

        prop_assert!((0.0..=100.0).contains(&result.occlusion_percentage));
        prop_assert_eq!(result.occlusion_detected, result.occlusion_percentage > threshold);
        for region in result.regions.iter() {
            prop_assert!((0.0..=1.0).contains(&region.confidence));
        }
    }

    #[test]
    fn close_regions_are_fully_visible(z in -1.0f32..=0.1) {
        let landmarks = vec![Landmark::new(0.5, 0.5, z); 478];
        let result = OcclusionEstimator::default().estimate(&landmarks);
        for region in result.regions.iter() {
            prop_assert_eq!(region.confidence, 1.0);
            prop_assert!(!region.is_occluded);
        }
    }
}

#[test]
fn empty_input_is_deterministic() {
    let estimator = OcclusionEstimator::default();
    let a = estimator.estimate(&[]);
    let b = estimator.estimate(&[]);
    assert_eq!(a, b);
    assert_eq!(a.occlusion_percentage, 100.0);
    assert!(a.occlusion_detected);
}
