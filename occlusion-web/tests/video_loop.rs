//! Headless runs of the webcam loop

use face_occlusion_web::{
    colors, BlendShapeCategory, Classifications, DetectionResult, DrawCommand, Error, FaceDetector,
    Landmark, OcclusionConfig, OcclusionSession, RecordingSurface, Result, RunningMode, Surface, VideoFrame,
};

/// Replays scripted results and counts calls
struct ScriptedDetector {
    results: Vec<Result<DetectionResult>>,
    calls: usize,
    timestamps: Vec<f64>,
}

impl ScriptedDetector {
    fn new(results: Vec<Result<DetectionResult>>) -> Self {
        Self {
            results,
            calls: 0,
            timestamps: Vec::new(),
        }
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect_for_video(&mut self, timestamp_ms: f64) -> Result<DetectionResult> {
        self.calls += 1;
        self.timestamps.push(timestamp_ms);
        if self.results.is_empty() {
            Ok(DetectionResult::default())
        } else {
            self.results.remove(0)
        }
    }
}

/// Fails every box outline, draws everything else
#[derive(Default)]
struct BrokenBoxSurface {
    inner: RecordingSurface,
}

impl Surface for BrokenBoxSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.inner.clear(width, height)
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<()> {
        match command {
            // The meter border is the only white outline
            DrawCommand::StrokeRect { color, .. } if *color != colors::WHITE => {
                Err(Error::Canvas("stroke failed".into()))
            }
            _ => self.inner.draw(command),
        }
    }
}

fn face(z: f32) -> DetectionResult {
    DetectionResult {
        face_landmarks: vec![vec![Landmark::new(0.5, 0.5, z); 478]],
        face_blend_shapes: vec![Classifications {
            categories: vec![BlendShapeCategory {
                category_name: "jawOpen".into(),
                display_name: String::new(),
                score: 0.25,
            }],
        }],
    }
}

fn contour_commands(surface: &RecordingSurface) -> usize {
    surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Segments { .. }))
        .count()
}

fn frame(current_time: f64, now_ms: f64) -> VideoFrame {
    VideoFrame {
        current_time,
        now_ms,
        width: 640.0,
        height: 480.0,
    }
}

#[test]
fn test_same_source_frame_skips_detection() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(vec![Ok(face(-0.1))]);
    let mut surface = RecordingSurface::new();

    let first = session.video_step(&mut detector, &mut surface, frame(1.0, 0.0)).unwrap();
    let second = session.video_step(&mut detector, &mut surface, frame(1.0, 16.0)).unwrap();

    assert_eq!(detector.calls, 1);
    assert!(first.detector_invoked);
    assert!(!second.detector_invoked);
    // Still painted from the previous detection
    assert!(second.face_found);
    assert_eq!(surface.clears, 2);
    assert!(surface.texts().contains(&"FACE OCCLUSION"));

    session.video_step(&mut detector, &mut surface, frame(1.033, 33.0)).unwrap();
    assert_eq!(detector.calls, 2);
}

#[test]
fn test_meter_holds_then_fades_to_full_occlusion() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(vec![Ok(face(-0.1))]);
    let mut surface = RecordingSurface::new();

    let fresh = session.video_step(&mut detector, &mut surface, frame(0.0, 1000.0)).unwrap();
    assert_eq!(fresh.occlusion_percentage, 0.0);

    // Face gone: the meter keeps the last value for the fade window
    let held = session.video_step(&mut detector, &mut surface, frame(0.1, 1100.0)).unwrap();
    assert!(!held.face_found);
    assert_eq!(held.occlusion_percentage, 0.0);
    assert!(surface.texts().contains(&"0%"));

    let held = session.video_step(&mut detector, &mut surface, frame(0.2, 3099.0)).unwrap();
    assert_eq!(held.occlusion_percentage, 0.0);

    let faded = session.video_step(&mut detector, &mut surface, frame(0.3, 3100.0)).unwrap();
    assert_eq!(faded.occlusion_percentage, 100.0);
    assert!(faded.occlusion_detected);
    assert!(surface.texts().contains(&"100%"));
    // No region boxes without a fresh face
    assert!(!surface.texts().iter().any(|t| t.starts_with("leftEye")));
}

#[test]
fn test_box_failure_does_not_stop_the_frame() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(vec![Ok(face(-0.1)), Ok(face(-0.1))]);
    let mut surface = BrokenBoxSurface::default();

    let report = session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    assert!(report.face_found);
    assert_eq!(report.blend_shapes.len(), 1);
    assert!(surface.inner.texts().contains(&"FACE OCCLUSION"));
    assert!(!surface.inner.texts().iter().any(|t| t.starts_with("leftEye")));

    // The loop keeps going
    let report = session.video_step(&mut detector, &mut surface, frame(0.1, 16.0)).unwrap();
    assert!(report.detector_invoked);
}

#[test]
fn test_detector_error_counts_as_no_face() {
    let mut session = OcclusionSession::new(OcclusionConfig {
        fade_duration_ms: 0.0,
        ..OcclusionConfig::default()
    });
    let mut detector = ScriptedDetector::new(vec![Err(Error::Detector("model not loaded".into()))]);
    let mut surface = RecordingSurface::new();

    let report = session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    assert!(!report.face_found);
    assert_eq!(report.occlusion_percentage, 100.0);
    assert!(report.blend_shapes.is_empty());
}

#[test]
fn test_region_boxes_drawn_for_fresh_face() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(vec![Ok(face(0.5))]);
    let mut surface = RecordingSurface::new();

    let report = session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    // Every region hidden, frontal head: 0.7 * 100 + 0.3 * 0
    assert!((report.occlusion_percentage - 70.0).abs() < 1e-3);
    assert!(report.occlusion_detected);
    assert!(surface.texts().contains(&"70%"));
    assert!(surface.texts().contains(&"leftEye 0%"));
    assert!(surface.texts().contains(&"rightCheek 0%"));
}

#[test]
fn test_image_path() {
    let mut session = OcclusionSession::default();
    let mut surface = RecordingSurface::new();

    let report = session.analyze_image(&face(-0.2), &mut surface, (320.0, 240.0)).unwrap();
    assert!(report.face_found);
    assert_eq!(report.occlusion_percentage, 0.0);
    assert!(!report.occlusion_detected);
    assert!(surface.texts().contains(&"nose 100%"));

    let mut surface = RecordingSurface::new();
    let report = session
        .analyze_image(&DetectionResult::default(), &mut surface, (320.0, 240.0))
        .unwrap();
    assert!(!report.face_found);
    assert_eq!(report.occlusion_percentage, 100.0);
    assert!(surface.commands.is_empty());
}

#[test]
fn test_detector_clock_never_goes_backwards() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(Vec::new());
    let mut surface = RecordingSurface::new();

    for (current_time, now_ms) in [(0.0, 500.0), (0.1, 520.0), (0.2, 90.0), (0.3, 90.0), (0.4, 600.0)] {
        session.video_step(&mut detector, &mut surface, frame(current_time, now_ms)).unwrap();
    }

    assert_eq!(detector.timestamps, vec![500.0, 520.0, 521.0, 522.0, 600.0]);
}

#[test]
fn test_unswitched_mode_is_reported() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(Vec::new());
    let mut surface = RecordingSurface::new();

    let first = session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    assert!(first.mode_switched);
    let second = session.video_step(&mut detector, &mut surface, frame(0.1, 16.0)).unwrap();
    assert!(!second.mode_switched);

    // Glue that switched first gets no warning
    let mut session = OcclusionSession::default();
    assert!(session.enter_mode(RunningMode::Video));
    let report = session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    assert!(!report.mode_switched);
}

#[test]
fn test_null_coordinate_keeps_the_frame() {
    let detection = DetectionResult::from_json(
        r#"{
            "faceLandmarks": [[{"x": 0.1, "y": 0.2, "z": null}, {"x": 0.4, "y": 0.5, "z": 0.01}]],
            "faceBlendshapes": [{"categories": [{"score": 0.25, "categoryName": "jawOpen"}]}]
        }"#,
    )
    .unwrap();
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(vec![Ok(detection)]);
    let mut surface = RecordingSurface::new();

    let report = session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    assert!(report.face_found);
    assert_eq!(report.blend_shapes.len(), 1);
    // Point 0 (mouth) is unresolvable; point 1 keeps the nose visible
    assert!((report.occlusion_percentage - 500.0 / 6.0).abs() < 1e-3);
}

#[test]
fn test_contours_follow_the_fresh_face() {
    let mut session = OcclusionSession::default();
    let mut detector = ScriptedDetector::new(vec![Ok(face(-0.1))]);
    let mut surface = RecordingSurface::new();

    session.video_step(&mut detector, &mut surface, frame(0.0, 0.0)).unwrap();
    assert_eq!(contour_commands(&surface), 8);

    // Face gone: the held meter stays, contours do not
    session.video_step(&mut detector, &mut surface, frame(0.1, 16.0)).unwrap();
    assert_eq!(contour_commands(&surface), 0);
    assert!(surface.texts().contains(&"FACE OCCLUSION"));

    let mut session = OcclusionSession::new(OcclusionConfig {
        draw_landmarks: false,
        ..OcclusionConfig::default()
    });
    let mut surface = RecordingSurface::new();
    session.analyze_image(&face(-0.1), &mut surface, (320.0, 240.0)).unwrap();
    assert_eq!(contour_commands(&surface), 0);
    assert!(surface.texts().contains(&"nose 100%"));
}
