//! Landmark overlay - face contours stroked over the detected landmarks
//!
//! Connector lists follow the face landmarker's published contours and
//! are named by the subject's side, as the landmarker names them. The
//! full tesselation mesh is not drawn.

use crate::occlusion::Landmark;
use super::commands::{Color, DrawCommand};

pub type Connection = (usize, usize);

pub const RIGHT_EYE: &[Connection] = &[
    (33, 7), (7, 163), (163, 144), (144, 145), (145, 153), (153, 154), (154, 155), (155, 133),
    (33, 246), (246, 161), (161, 160), (160, 159), (159, 158), (158, 157), (157, 173), (173, 133),
];

pub const RIGHT_EYEBROW: &[Connection] = &[
    (46, 53), (53, 52), (52, 65), (65, 55), (70, 63), (63, 105), (105, 66), (66, 107),
];

pub const LEFT_EYE: &[Connection] = &[
    (263, 249), (249, 390), (390, 373), (373, 374), (374, 380), (380, 381), (381, 382), (382, 362),
    (263, 466), (466, 388), (388, 387), (387, 386), (386, 385), (385, 384), (384, 398), (398, 362),
];

pub const LEFT_EYEBROW: &[Connection] = &[
    (276, 283), (283, 282), (282, 295), (295, 285), (300, 293), (293, 334), (334, 296), (296, 336),
];

pub const FACE_OVAL: &[Connection] = &[
    (10, 338), (338, 297), (297, 332), (332, 284), (284, 251), (251, 389), (389, 356), (356, 454),
    (454, 323), (323, 361), (361, 288), (288, 397), (397, 365), (365, 379), (379, 378), (378, 400),
    (400, 377), (377, 152), (152, 148), (148, 176), (176, 149), (149, 150), (150, 136), (136, 172),
    (172, 58), (58, 132), (132, 93), (93, 234), (234, 127), (127, 162), (162, 21), (21, 54),
    (54, 103), (103, 67), (67, 109), (109, 10),
];

pub const LIPS: &[Connection] = &[
    (61, 146), (146, 91), (91, 181), (181, 84), (84, 17), (17, 314), (314, 405), (405, 321),
    (321, 375), (375, 291), (61, 185), (185, 40), (40, 39), (39, 37), (37, 0), (0, 267),
    (267, 269), (269, 270), (270, 409), (409, 291), (78, 95), (95, 88), (88, 178), (178, 87),
    (87, 14), (14, 317), (317, 402), (402, 318), (318, 324), (324, 308), (78, 191), (191, 80),
    (80, 81), (81, 82), (82, 13), (13, 312), (312, 311), (311, 310), (310, 415), (415, 308),
];

/// Only present in the 478-point (refined) layout
pub const RIGHT_IRIS: &[Connection] = &[(469, 470), (470, 471), (471, 472), (472, 469)];
pub const LEFT_IRIS: &[Connection] = &[(474, 475), (475, 476), (476, 477), (477, 474)];

mod colors {
    use super::Color;

    /// Subject's right side
    pub const RIGHT: Color = Color::rgba(1.0, 0.188, 0.188, 1.0);
    /// Subject's left side
    pub const LEFT: Color = Color::rgba(0.188, 1.0, 0.188, 1.0);
    pub const OUTLINE: Color = Color::rgba(0.878, 0.878, 0.878, 1.0);
}

const LINE_WIDTH: f64 = 1.0;

/// Contours in drawing order
const CONTOURS: [(&[Connection], Color); 8] = [
    (RIGHT_EYE, colors::RIGHT),
    (RIGHT_EYEBROW, colors::RIGHT),
    (LEFT_EYE, colors::LEFT),
    (LEFT_EYEBROW, colors::LEFT),
    (FACE_OVAL, colors::OUTLINE),
    (LIPS, colors::OUTLINE),
    (RIGHT_IRIS, colors::RIGHT),
    (LEFT_IRIS, colors::LEFT),
];

/// Normalized landmark to surface pixels
fn to_pixels(lm: &Landmark, frame: (f64, f64)) -> (f64, f64) {
    (f64::from(lm.x) * frame.0, f64::from(lm.y) * frame.1)
}

/// Segments whose endpoints both exist and are finite
fn build_segments(
    landmarks: &[Landmark],
    connections: &[Connection],
    frame: (f64, f64),
) -> Vec<((f64, f64), (f64, f64))> {
    connections
        .iter()
        .filter_map(|&(a, b)| {
            let start = landmarks.get(a).filter(|lm| lm.is_finite())?;
            let end = landmarks.get(b).filter(|lm| lm.is_finite())?;
            Some((to_pixels(start, frame), to_pixels(end, frame)))
        })
        .collect()
}

/// Build the contour overlay for one face; `frame` is the surface size in pixels
pub fn build_landmark_overlay_commands(landmarks: &[Landmark], frame: (f64, f64)) -> Vec<DrawCommand> {
    CONTOURS
        .iter()
        .filter_map(|(connections, color)| {
            let segments = build_segments(landmarks, connections, frame);
            if segments.is_empty() {
                return None;
            }
            Some(DrawCommand::Segments {
                segments,
                color: *color,
                line_width: LINE_WIDTH,
            })
        })
        .collect()
}
