//! Draw primitives - a display list the surfaces replay

/// RGBA color (components 0-1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` string for canvas styles
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0),
        )
    }
}

/// Colors used by the overlay
pub mod colors {
    use super::Color;

    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    /// Meter panel background
    pub const PANEL: Color = Color::rgba(0.0, 0.0, 0.0, 0.7);
    /// Visible region / low occlusion
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);
    /// Partially occluded
    pub const YELLOW: Color = Color::rgba(1.0, 1.0, 0.0, 1.0);
    /// Occluded
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
}

/// Pixel-space rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Horizontal gradient from `x0` to `x1`
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub x0: f64,
    pub x1: f64,
    /// (offset 0-1, color)
    pub stops: Vec<(f32, Color)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        paint: Paint,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        line_width: f64,
    },
    /// Unconnected line segments stroked as one path
    Segments {
        segments: Vec<((f64, f64), (f64, f64))>,
        color: Color,
        line_width: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        font: &'static str,
        color: Color,
    },
}
