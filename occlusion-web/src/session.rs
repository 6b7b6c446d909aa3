//! Session - the explicit context for both invocation paths
//!
//! Owns everything that persists between frames: running mode, webcam
//! toggle, last processed source frame, last detection and the meter's
//! display state. The host's animation-frame loop calls `video_step`
//! once per refresh; image clicks call `analyze_image`.

use crate::config::OcclusionConfig;
use crate::detection::{BlendShapeCategory, DetectionResult};
use crate::error::Result;
use crate::occlusion::{Landmark, OcclusionEstimator, OcclusionResult};
use crate::renderer::{
    build_landmark_overlay_commands, build_meter_commands, build_region_box_commands, DisplayState,
    Surface,
};

pub const ENABLE_LABEL: &str = "ENABLE PREDICTIONS";
pub const DISABLE_LABEL: &str = "DISABLE PREDICTIONS";

/// Detector running mode; switching requires reconfiguring the detector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunningMode {
    Image,
    Video,
}

impl RunningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunningMode::Image => "IMAGE",
            RunningMode::Video => "VIDEO",
        }
    }
}

/// The external landmark detector, video flavour
pub trait FaceDetector {
    fn detect_for_video(&mut self, timestamp_ms: f64) -> Result<DetectionResult>;
}

/// Host-provided timing and geometry for one animation frame
#[derive(Clone, Copy, Debug)]
pub struct VideoFrame {
    /// Source video position (seconds); identical values mean the same frame
    pub current_time: f64,
    /// Monotonic host clock (`performance.now()`), also the detector timestamp
    pub now_ms: f64,
    pub width: f64,
    pub height: f64,
}

/// What one frame did
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// The call had to switch running mode itself
    pub mode_switched: bool,
    pub detector_invoked: bool,
    pub face_found: bool,
    pub occlusion_percentage: f32,
    pub occlusion_detected: bool,
    pub blend_shapes: Vec<BlendShapeCategory>,
}

pub struct OcclusionSession {
    estimator: OcclusionEstimator,
    mode: RunningMode,
    webcam_running: bool,
    last_video_time: Option<f64>,
    last_timestamp_ms: Option<f64>,
    last_detection: Option<DetectionResult>,
    display: DisplayState,
}

impl OcclusionSession {
    pub fn new(config: OcclusionConfig) -> Self {
        let estimator = OcclusionEstimator::new(config);
        let display = DisplayState::new(estimator.config().fade_duration_ms, estimator.regions());
        Self {
            estimator,
            mode: RunningMode::Image,
            webcam_running: false,
            last_video_time: None,
            last_timestamp_ms: None,
            last_detection: None,
            display,
        }
    }

    pub fn config(&self) -> &OcclusionConfig {
        self.estimator.config()
    }

    pub fn mode(&self) -> RunningMode {
        self.mode
    }

    /// Switch running mode; true when the detector must be reconfigured
    pub fn enter_mode(&mut self, mode: RunningMode) -> bool {
        if self.mode == mode {
            return false;
        }
        log::info!("running mode {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
        true
    }

    /// Flip the webcam toggle and return the new button label
    pub fn toggle_webcam(&mut self) -> &'static str {
        self.webcam_running = !self.webcam_running;
        if self.webcam_running {
            DISABLE_LABEL
        } else {
            // The loop ends on its own after the in-flight frame
            ENABLE_LABEL
        }
    }

    /// Whether the host should schedule another `video_step`
    pub fn should_continue(&self) -> bool {
        self.webcam_running
    }

    pub fn displayed(&self) -> &OcclusionResult {
        self.display.displayed()
    }

    /// One iteration of the video loop
    ///
    /// Runs the detector only when the source frame changed, then
    /// repaints contours, meter and boxes from the latest detection.
    /// Region box failures are logged and skipped; the meter and blend
    /// shapes still update.
    pub fn video_step<D, S>(
        &mut self,
        detector: &mut D,
        surface: &mut S,
        frame: VideoFrame,
    ) -> Result<FrameReport>
    where
        D: FaceDetector + ?Sized,
        S: Surface + ?Sized,
    {
        let mode_switched = self.enter_mode(RunningMode::Video);
        if mode_switched {
            log::warn!("video frame arrived in IMAGE mode; detector options were not switched to VIDEO");
        }

        let mut detector_invoked = false;
        if self.last_video_time != Some(frame.current_time) {
            self.last_video_time = Some(frame.current_time);
            detector_invoked = true;
            let timestamp_ms = self.next_detector_timestamp(frame.now_ms);
            match detector.detect_for_video(timestamp_ms) {
                Ok(detection) => self.last_detection = Some(detection),
                Err(err) => {
                    log::warn!("detection failed at {:.3}s: {}", frame.current_time, err);
                    self.last_detection = None;
                }
            }
        }

        surface.clear(frame.width, frame.height)?;

        let face = self.last_detection.as_ref().and_then(DetectionResult::primary_face);
        if let Some(landmarks) = face {
            self.draw_landmarks(surface, landmarks, (frame.width, frame.height))?;
        }
        let fresh = face.map(|landmarks| self.estimator.estimate(landmarks));

        let shown = self.display.observe(fresh.as_ref(), frame.now_ms).clone();
        surface.draw_all(&build_meter_commands(
            shown.occlusion_percentage,
            self.config().meter_origin,
        ))?;

        if let Some(result) = &fresh {
            if let Err(err) = self.draw_region_boxes(surface, result, (frame.width, frame.height)) {
                log::warn!("skipping region boxes this frame: {}", err);
            }
        }

        let blend_shapes = self
            .last_detection
            .as_ref()
            .map(|d| d.primary_blend_shapes().to_vec())
            .unwrap_or_default();

        Ok(FrameReport {
            mode_switched,
            detector_invoked,
            face_found: fresh.is_some(),
            occlusion_percentage: shown.occlusion_percentage,
            occlusion_detected: shown.occlusion_detected,
            blend_shapes,
        })
    }

    /// One-shot analysis of an already-detected still image
    ///
    /// Every detected face gets its contours, meter and boxes. No fade
    /// state is involved; a result without faces reports the empty-input
    /// policy.
    pub fn analyze_image<S>(
        &mut self,
        detection: &DetectionResult,
        surface: &mut S,
        size: (f64, f64),
    ) -> Result<FrameReport>
    where
        S: Surface + ?Sized,
    {
        let mode_switched = self.enter_mode(RunningMode::Image);
        if mode_switched {
            log::warn!("image analyzed in VIDEO mode; detector options were not switched to IMAGE");
        }

        let faces: Vec<&[Landmark]> = detection
            .face_landmarks
            .iter()
            .map(Vec::as_slice)
            .filter(|lms| !lms.is_empty())
            .collect();
        let results: Vec<OcclusionResult> =
            faces.iter().map(|lms| self.estimator.estimate(lms)).collect();

        for (landmarks, result) in faces.iter().zip(results.iter()) {
            self.draw_landmarks(surface, landmarks, size)?;
            if let Err(err) = self.draw_region_boxes(surface, result, size) {
                log::warn!("skipping region boxes for image: {}", err);
            }
            surface.draw_all(&build_meter_commands(
                result.occlusion_percentage,
                self.config().meter_origin,
            ))?;
        }

        let summary = match results.first() {
            Some(first) => first.clone(),
            None => self.estimator.empty_result(),
        };

        Ok(FrameReport {
            mode_switched,
            detector_invoked: true,
            face_found: !results.is_empty(),
            occlusion_percentage: summary.occlusion_percentage,
            occlusion_detected: summary.occlusion_detected,
            blend_shapes: detection.primary_blend_shapes().to_vec(),
        })
    }

    /// Detector timestamps must strictly increase; a clock that stalls or
    /// steps back is nudged 1 ms past the previous call
    fn next_detector_timestamp(&mut self, now_ms: f64) -> f64 {
        let timestamp = match self.last_timestamp_ms {
            Some(prev) if !now_ms.is_finite() || now_ms <= prev => {
                log::warn!("host clock went from {:.1}ms to {:.1}ms", prev, now_ms);
                prev + 1.0
            }
            None if !now_ms.is_finite() => 0.0,
            _ => now_ms,
        };
        self.last_timestamp_ms = Some(timestamp);
        timestamp
    }

    fn draw_landmarks<S>(&self, surface: &mut S, landmarks: &[Landmark], size: (f64, f64)) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        if !self.config().draw_landmarks {
            return Ok(());
        }
        surface.draw_all(&build_landmark_overlay_commands(landmarks, size))
    }

    fn draw_region_boxes<S>(&self, surface: &mut S, result: &OcclusionResult, size: (f64, f64)) -> Result<()>
    where
        S: Surface + ?Sized,
    {
        let commands = build_region_box_commands(result, self.config().box_layout, size)?;
        surface.draw_all(&commands)
    }
}

impl Default for OcclusionSession {
    fn default() -> Self {
        Self::new(OcclusionConfig::default())
    }
}
