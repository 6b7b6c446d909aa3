//! Drawing surfaces - replay a display list onto a 2D canvas

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::error::{describe_js, Error, Result};
use super::commands::{DrawCommand, Paint};

/// Anything a display list can be replayed onto
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;
    fn draw(&mut self, command: &DrawCommand) -> Result<()>;

    fn draw_all(&mut self, commands: &[DrawCommand]) -> Result<()> {
        for command in commands {
            self.draw(command)?;
        }
        Ok(())
    }
}

fn canvas_err(err: JsValue) -> Error {
    Error::Canvas(describe_js(&err))
}

// `set_*_style` take `&JsValue` across web-sys releases
#[allow(deprecated)]
impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<()> {
        match command {
            DrawCommand::FillRect { rect, paint } => {
                match paint {
                    Paint::Solid(color) => {
                        self.set_fill_style(&JsValue::from_str(&color.to_css()));
                    }
                    Paint::LinearGradient(gradient) => {
                        let fill = self.create_linear_gradient(gradient.x0, 0.0, gradient.x1, 0.0);
                        for (offset, color) in gradient.stops.iter() {
                            fill.add_color_stop(*offset, &color.to_css()).map_err(canvas_err)?;
                        }
                        self.set_fill_style(&fill);
                    }
                }
                self.fill_rect(rect.x, rect.y, rect.width, rect.height);
            }
            DrawCommand::StrokeRect { rect, color, line_width } => {
                self.set_stroke_style(&JsValue::from_str(&color.to_css()));
                self.set_line_width(*line_width);
                self.stroke_rect(rect.x, rect.y, rect.width, rect.height);
            }
            DrawCommand::Segments { segments, color, line_width } => {
                self.set_stroke_style(&JsValue::from_str(&color.to_css()));
                self.set_line_width(*line_width);
                self.begin_path();
                for ((x1, y1), (x2, y2)) in segments.iter() {
                    self.move_to(*x1, *y1);
                    self.line_to(*x2, *y2);
                }
                self.stroke();
            }
            DrawCommand::FillText { text, x, y, font, color } => {
                self.set_fill_style(&JsValue::from_str(&color.to_css()));
                self.set_font(font);
                self.fill_text(text, *x, *y).map_err(canvas_err)?;
            }
        }
        Ok(())
    }
}

/// Headless surface that records what was drawn
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every `FillText` drawn so far
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) -> Result<()> {
        self.commands.clear();
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<()> {
        self.commands.push(command.clone());
        Ok(())
    }
}
