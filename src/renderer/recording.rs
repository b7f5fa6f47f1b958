//! A surface that records draw calls instead of producing pixels

use crate::geometry::{BoundingBox, Point, Size};
use crate::style::{Color, FontSpec, TextAlign, TextBaseline};

use super::surface::Surface;

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize {
        device: Size,
        display: Size,
    },
    Clear,
    Save,
    Restore,
    Translate {
        dx: f64,
        dy: f64,
    },
    Rotate {
        degrees: f64,
    },
    SetGlobalAlpha(f64),
    SetLineDash(Vec<f64>),
    FillRect {
        rect: BoundingBox,
        radius: f64,
        color: Color,
    },
    StrokeRect {
        rect: BoundingBox,
        radius: f64,
        color: Color,
        width: f64,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        color: Color,
        width: f64,
    },
    StrokeLine {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    FillText {
        text: String,
        at: Point,
        font: FontSpec,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    },
}

/// Records every call in order. `clear` drops everything but the latest resize and is
/// itself kept.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    display: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text passed to every `fill_text` call, in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Device size from the last resize
    pub fn device_size(&self) -> Option<Size> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Resize { device, .. } => Some(*device),
            _ => None,
        })
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, device: Size, display: Size) {
        self.display = display;
        self.push(DrawCommand::Resize { device, display });
    }

    fn display_size(&self) -> Size {
        self.display
    }

    fn clear(&mut self) {
        let resize = self
            .commands
            .iter()
            .rev()
            .find(|c| matches!(c, DrawCommand::Resize { .. }))
            .cloned();
        self.commands.clear();
        self.commands.extend(resize);
        self.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f64) {
        self.push(DrawCommand::Rotate { degrees });
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.push(DrawCommand::SetGlobalAlpha(alpha));
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.push(DrawCommand::SetLineDash(segments.to_vec()));
    }

    fn fill_rect(&mut self, rect: BoundingBox, radius: f64, color: &Color) {
        self.push(DrawCommand::FillRect {
            rect,
            radius,
            color: color.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: BoundingBox, radius: f64, color: &Color, width: f64) {
        self.push(DrawCommand::StrokeRect {
            rect,
            radius,
            color: color.clone(),
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color: color.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &Color, width: f64) {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color: color.clone(),
            width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &Color, width: f64) {
        self.push(DrawCommand::StrokeLine {
            from,
            to,
            color: color.clone(),
            width,
        });
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        font: &FontSpec,
        align: TextAlign,
        baseline: TextBaseline,
        color: &Color,
    ) {
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            font: font.clone(),
            align,
            baseline,
            color: color.clone(),
        });
    }
}
