//! Occlusion estimator - scores each region from landmark depth
//!
//! A region close to the camera (small z) is treated as unobstructed.
//! Points an occluder pushes away, or that the detector cannot place,
//! lower the region's confidence. The aggregate is the mean confidence,
//! optionally blended with a head-turn estimate.

use crate::config::{DepthScoring, EmptyInputPolicy, OcclusionConfig};
use super::head_turn::head_turn_occlusion;
use super::landmark::{Landmark, NormRect};
use super::regions::{regions_for, RegionKind, RegionSpec};

/// Minimum samples before outlier trimming kicks in
const MIN_SAMPLES_FOR_TRIM: usize = 3;

/// Per-region score for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct RegionResult {
    pub kind: RegionKind,
    /// Visibility confidence (0 = hidden, 1 = fully visible)
    pub confidence: f32,
    pub is_occluded: bool,
    /// Normalized bounds of the resolvable points, if any
    pub bounds: Option<NormRect>,
}

/// Aggregate result for one face in one frame
#[derive(Clone, Debug, PartialEq)]
pub struct OcclusionResult {
    /// 0-100
    pub occlusion_percentage: f32,
    pub occlusion_detected: bool,
    pub regions: Vec<RegionResult>,
    /// Head-turn contribution, when the anchor points were available
    pub head_turn: Option<f32>,
}

impl OcclusionResult {
    /// Worst case: every region hidden, 100% occlusion
    pub fn fully_occluded(regions: &[RegionSpec]) -> Self {
        Self {
            occlusion_percentage: 100.0,
            occlusion_detected: true,
            regions: regions
                .iter()
                .map(|spec| RegionResult {
                    kind: spec.kind,
                    confidence: 0.0,
                    is_occluded: true,
                    bounds: None,
                })
                .collect(),
            head_turn: None,
        }
    }

    /// No data: 0% occlusion, nothing flagged
    pub fn empty() -> Self {
        Self {
            occlusion_percentage: 0.0,
            occlusion_detected: false,
            regions: Vec::new(),
            head_turn: None,
        }
    }

    pub fn region(&self, kind: RegionKind) -> Option<&RegionResult> {
        self.regions.iter().find(|r| r.kind == kind)
    }
}

/// Map a mean depth to confidence: 1 at or below `threshold`, falling
/// linearly by `falloff` per unit of depth beyond it
pub fn depth_confidence(mean_z: f32, threshold: f32, falloff: f32) -> f32 {
    if mean_z <= threshold {
        1.0
    } else {
        (1.0 - (mean_z - threshold) * falloff).clamp(0.0, 1.0)
    }
}

pub struct OcclusionEstimator {
    config: OcclusionConfig,
    regions: &'static [RegionSpec],
}

impl OcclusionEstimator {
    pub fn new(config: OcclusionConfig) -> Self {
        let regions = regions_for(config.region_source);
        Self { config, regions }
    }

    pub fn config(&self) -> &OcclusionConfig {
        &self.config
    }

    pub fn regions(&self) -> &'static [RegionSpec] {
        self.regions
    }

    /// Result used when a frame has no landmarks
    pub fn empty_result(&self) -> OcclusionResult {
        match self.config.empty_input {
            EmptyInputPolicy::AssumeOccluded => OcclusionResult::fully_occluded(self.regions),
            EmptyInputPolicy::NoData => OcclusionResult::empty(),
        }
    }

    /// Score one face's landmarks
    pub fn estimate(&self, landmarks: &[Landmark]) -> OcclusionResult {
        if landmarks.is_empty() || self.regions.is_empty() {
            return self.empty_result();
        }

        let regions: Vec<RegionResult> = self
            .regions
            .iter()
            .map(|spec| self.score_region(spec, landmarks))
            .collect();

        let mean_confidence =
            regions.iter().map(|r| r.confidence).sum::<f32>() / regions.len() as f32;
        let region_occlusion = 100.0 - mean_confidence * 100.0;

        let head_turn = self
            .config
            .head_turn
            .and_then(|turn| head_turn_occlusion(landmarks, turn.gain).map(|score| (turn, score)));

        let combined = match head_turn {
            Some((turn, score)) => region_occlusion * (1.0 - turn.weight) + score * turn.weight,
            None => region_occlusion,
        };

        let occlusion_percentage = if combined.is_finite() {
            combined.clamp(0.0, 100.0)
        } else {
            100.0
        };

        OcclusionResult {
            occlusion_percentage,
            occlusion_detected: occlusion_percentage > self.config.occlusion_threshold,
            regions,
            head_turn: head_turn.map(|(_, score)| score),
        }
    }

    fn score_region(&self, spec: &RegionSpec, landmarks: &[Landmark]) -> RegionResult {
        let points: Vec<&Landmark> = spec
            .indices
            .iter()
            .filter_map(|&idx| landmarks.get(idx))
            .filter(|lm| lm.is_finite())
            .collect();

        if points.is_empty() {
            return RegionResult {
                kind: spec.kind,
                confidence: 0.0,
                is_occluded: true,
                bounds: None,
            };
        }

        let threshold = self.config.visibility_threshold;
        let zs: Vec<f32> = points.iter().map(|lm| lm.z).collect();
        let mean_z = self.trimmed_mean(&zs);
        let depth_conf = depth_confidence(mean_z, threshold, self.config.depth_falloff);

        let confidence = match self.config.depth_scoring {
            DepthScoring::Mean => depth_conf,
            DepthScoring::MeanWithVisibleRatio => {
                // Missing indices count against the ratio
                let visible = zs.iter().filter(|&&z| z <= threshold).count();
                let ratio = visible as f32 / spec.indices.len() as f32;
                0.5 * ratio + 0.5 * depth_conf
            }
        }
        .clamp(0.0, 1.0);

        RegionResult {
            kind: spec.kind,
            confidence,
            is_occluded: confidence < self.config.region_occluded_below,
            bounds: NormRect::enclosing(points.iter().copied()),
        }
    }

    /// Mean depth, ignoring samples beyond `outlier_sigma` standard deviations
    fn trimmed_mean(&self, zs: &[f32]) -> f32 {
        let mean = mean_f64(zs.iter().copied());

        let sigma = match self.config.outlier_sigma {
            Some(sigma) if zs.len() >= MIN_SAMPLES_FOR_TRIM => f64::from(sigma),
            _ => return mean as f32,
        };

        let variance = zs
            .iter()
            .map(|&z| (f64::from(z) - mean).powi(2))
            .sum::<f64>()
            / zs.len() as f64;
        let std_dev = variance.sqrt();
        if std_dev < f64::from(f32::EPSILON) {
            return mean as f32;
        }

        let limit = sigma * std_dev;
        let kept: Vec<f32> = zs
            .iter()
            .copied()
            .filter(|&z| (f64::from(z) - mean).abs() <= limit)
            .collect();
        if kept.is_empty() {
            mean as f32
        } else {
            mean_f64(kept.into_iter()) as f32
        }
    }
}

/// Accumulate in f64 so a region of identical depths averages back exactly
fn mean_f64(values: impl Iterator<Item = f32>) -> f64 {
    let (sum, count) = values.fold((0.0f64, 0usize), |(sum, n), v| (sum + f64::from(v), n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl Default for OcclusionEstimator {
    fn default() -> Self {
        Self::new(OcclusionConfig::default())
    }
}
