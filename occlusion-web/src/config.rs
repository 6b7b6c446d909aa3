//! Runtime configuration
//!
//! Every heuristic knob lives here. JS passes an optional JSON object;
//! missing fields keep their defaults.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Which landmark index sets define the scored regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionSource {
    /// Hand-picked index lists (eyes, nose, mouth, cheeks)
    IndexList,
    /// Contour index sets published with the face landmarker
    LibraryContours,
}

/// How a region's depth samples become a confidence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DepthScoring {
    /// Confidence from the (outlier-trimmed) mean depth only
    Mean,
    /// Half mean-depth confidence, half fraction of points within threshold
    MeanWithVisibleRatio,
}

/// Result reported when a frame carries no landmarks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyInputPolicy {
    /// 100% occlusion, detected
    AssumeOccluded,
    /// 0% occlusion, nothing detected
    NoData,
}

/// Where region boxes come from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoxLayout {
    /// Min/max of the region's landmarks in this frame
    Geometry,
    /// Static normalized layout table
    Fixed,
}

/// Horizontal head-turn contribution to the aggregate score
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadTurnConfig {
    /// Blend weight of the head-turn score (region score gets `1 - weight`)
    pub weight: f32,
    /// Percent of occlusion per unit of nose offset from the cheek midpoint
    pub gain: f32,
}

impl Default for HeadTurnConfig {
    fn default() -> Self {
        Self {
            weight: 0.3,
            gain: 800.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OcclusionConfig {
    pub region_source: RegionSource,
    pub depth_scoring: DepthScoring,
    /// Depth at or below which a point counts as fully visible
    pub visibility_threshold: f32,
    /// Confidence lost per unit of depth beyond the threshold
    pub depth_falloff: f32,
    /// Drop samples farther than this many standard deviations from the mean
    pub outlier_sigma: Option<f32>,
    /// Regions below this confidence are flagged occluded
    pub region_occluded_below: f32,
    /// Aggregate occlusion percentage above which occlusion is reported
    pub occlusion_threshold: f32,
    pub head_turn: Option<HeadTurnConfig>,
    pub empty_input: EmptyInputPolicy,
    pub box_layout: BoxLayout,
    /// Stroke eye, eyebrow, iris, lip and face-oval contours for each face
    pub draw_landmarks: bool,
    /// How long the meter keeps the last value after the face disappears
    pub fade_duration_ms: f64,
    /// Top-left corner of the meter panel, in surface pixels
    pub meter_origin: (f64, f64),
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        Self {
            region_source: RegionSource::IndexList,
            depth_scoring: DepthScoring::Mean,
            visibility_threshold: 0.1,
            depth_falloff: 5.0,
            outlier_sigma: Some(2.0),
            region_occluded_below: 0.5,
            occlusion_threshold: 30.0,
            head_turn: Some(HeadTurnConfig::default()),
            empty_input: EmptyInputPolicy::AssumeOccluded,
            box_layout: BoxLayout::Geometry,
            draw_landmarks: true,
            fade_duration_ms: 2000.0,
            meter_origin: (10.0, 10.0),
        }
    }
}

impl OcclusionConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| Error::Decode {
            what: "occlusion config",
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.visibility_threshold.is_finite() {
            return Err(Error::InvalidConfig("visibilityThreshold must be finite".into()));
        }
        if !(self.depth_falloff.is_finite() && self.depth_falloff > 0.0) {
            return Err(Error::InvalidConfig("depthFalloff must be positive".into()));
        }
        if let Some(sigma) = self.outlier_sigma {
            if !(sigma.is_finite() && sigma >= 1.0) {
                return Err(Error::InvalidConfig("outlierSigma must be at least 1".into()));
            }
        }
        if !(0.0..=1.0).contains(&self.region_occluded_below) {
            return Err(Error::InvalidConfig("regionOccludedBelow must be within 0..=1".into()));
        }
        if !(0.0..=100.0).contains(&self.occlusion_threshold) {
            return Err(Error::InvalidConfig("occlusionThreshold must be within 0..=100".into()));
        }
        if let Some(turn) = &self.head_turn {
            if !(0.0..=1.0).contains(&turn.weight) {
                return Err(Error::InvalidConfig("headTurn.weight must be within 0..=1".into()));
            }
            if !(turn.gain.is_finite() && turn.gain >= 0.0) {
                return Err(Error::InvalidConfig("headTurn.gain must be non-negative".into()));
            }
        }
        if !(self.fade_duration_ms.is_finite() && self.fade_duration_ms >= 0.0) {
            return Err(Error::InvalidConfig("fadeDurationMs must be non-negative".into()));
        }
        Ok(())
    }
}
