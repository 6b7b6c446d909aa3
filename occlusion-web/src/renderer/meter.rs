//! Occlusion meter - labeled panel with a green→yellow→red bar

use super::commands::{colors, DrawCommand, LinearGradient, Paint, Rect};

pub const METER_WIDTH: f64 = 150.0;
pub const METER_HEIGHT: f64 = 50.0;

/// Horizontal inset of title and bar
const PADDING: f64 = 10.0;
const BAR_TOP: f64 = 30.0;
const BAR_HEIGHT: f64 = 10.0;

/// Build the meter's display list with its top-left corner at `origin`
pub fn build_meter_commands(occlusion_percentage: f32, origin: (f64, f64)) -> Vec<DrawCommand> {
    let (x, y) = origin;
    let percentage = occlusion_percentage.clamp(0.0, 100.0);
    let bar_width = METER_WIDTH - 2.0 * PADDING;

    vec![
        DrawCommand::FillRect {
            rect: Rect::new(x, y, METER_WIDTH, METER_HEIGHT),
            paint: Paint::Solid(colors::PANEL),
        },
        DrawCommand::StrokeRect {
            rect: Rect::new(x, y, METER_WIDTH, METER_HEIGHT),
            color: colors::WHITE,
            line_width: 2.0,
        },
        DrawCommand::FillText {
            text: "FACE OCCLUSION".to_string(),
            x: x + PADDING,
            y: y + 20.0,
            font: "bold 14px Arial",
            color: colors::WHITE,
        },
        DrawCommand::FillText {
            text: format!("{}%", percentage.round() as i32),
            x: x + METER_WIDTH - 40.0,
            y: y + 20.0,
            font: "bold 12px Arial",
            color: colors::WHITE,
        },
        // Track
        DrawCommand::FillRect {
            rect: Rect::new(x + PADDING, y + BAR_TOP, bar_width, BAR_HEIGHT),
            paint: Paint::Solid(colors::WHITE),
        },
        // Fill
        DrawCommand::FillRect {
            rect: Rect::new(
                x + PADDING,
                y + BAR_TOP,
                bar_width * f64::from(percentage) / 100.0,
                BAR_HEIGHT,
            ),
            paint: Paint::LinearGradient(LinearGradient {
                x0: x + PADDING,
                x1: x + METER_WIDTH - PADDING,
                stops: vec![
                    (0.0, colors::GREEN),
                    (0.5, colors::YELLOW),
                    (1.0, colors::RED),
                ],
            }),
        },
    ]
}
