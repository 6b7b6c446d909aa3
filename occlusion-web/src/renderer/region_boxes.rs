//! Region boxes - one outlined, labeled box per scored region

use crate::config::BoxLayout;
use crate::error::{Error, Result};
use crate::occlusion::{NormRect, OcclusionResult, RegionResult};
use super::commands::{colors, Color, DrawCommand, Rect};

const BOX_LINE_WIDTH: f64 = 2.0;
const LABEL_FONT: &str = "12px Arial";
/// Gap between label baseline and box top
const LABEL_OFFSET: f64 = 4.0;

/// Three-tier confidence banding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceBand {
    Visible,
    Partial,
    Occluded,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > 0.7 {
            ConfidenceBand::Visible
        } else if confidence >= 0.3 {
            ConfidenceBand::Partial
        } else {
            ConfidenceBand::Occluded
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ConfidenceBand::Visible => colors::GREEN,
            ConfidenceBand::Partial => colors::YELLOW,
            ConfidenceBand::Occluded => colors::RED,
        }
    }
}

/// Normalized region rectangle to surface pixels
fn to_pixels(rect: NormRect, frame: (f64, f64)) -> Rect {
    let (width, height) = frame;
    Rect::new(
        f64::from(rect.x) * width,
        f64::from(rect.y) * height,
        f64::from(rect.width) * width,
        f64::from(rect.height) * height,
    )
}

fn region_rect(region: &RegionResult, layout: BoxLayout) -> Result<NormRect> {
    let rect = match (layout, region.bounds) {
        (BoxLayout::Geometry, Some(bounds)) => bounds,
        _ => region.kind.fixed_layout(),
    };
    if !rect.is_finite() {
        return Err(Error::MalformedRegion {
            region: region.kind.name(),
            reason: "non-finite bounds",
        });
    }
    if rect.width < 0.0 || rect.height < 0.0 {
        return Err(Error::MalformedRegion {
            region: region.kind.name(),
            reason: "negative extent",
        });
    }
    Ok(rect)
}

/// Build box and label commands for every region of `result`
///
/// `frame` is the surface size in pixels. Fails on the first region
/// with unusable geometry; callers treat that as a per-frame error.
pub fn build_region_box_commands(
    result: &OcclusionResult,
    layout: BoxLayout,
    frame: (f64, f64),
) -> Result<Vec<DrawCommand>> {
    let mut commands = Vec::with_capacity(result.regions.len() * 2);

    for region in result.regions.iter() {
        let rect = to_pixels(region_rect(region, layout)?, frame);
        let color = ConfidenceBand::from_confidence(region.confidence).color();

        commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            line_width: BOX_LINE_WIDTH,
        });
        commands.push(DrawCommand::FillText {
            text: format!("{} {}%", region.kind.name(), (region.confidence * 100.0).round() as i32),
            x: rect.x,
            y: rect.y - LABEL_OFFSET,
            font: LABEL_FONT,
            color,
        });
    }

    Ok(commands)
}
