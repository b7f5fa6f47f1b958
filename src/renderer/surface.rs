//! The immediate-mode 2D drawing surface the pipeline paints onto
//!
//! The method set follows a canvas context: a save/restore state stack holding the
//! current transform, global alpha and line dash, plus fill/stroke primitives in
//! device pixels.

use crate::geometry::{BoundingBox, Point, Size};
use crate::style::{Color, FontSpec, TextAlign, TextBaseline};

/// Average glyph advance as a fraction of the font size, used when no font
/// metrics are available
pub const AVERAGE_GLYPH_ADVANCE: f64 = 0.6;

/// Approximate rendered width of `text` in device pixels
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * AVERAGE_GLYPH_ADVANCE
}

pub trait Surface {
    /// Set the backing-store size (device pixels) and on-screen size
    fn resize(&mut self, device: Size, display: Size);

    /// On-screen size, used to map pointer positions back to millimeters
    fn display_size(&self) -> Size;

    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Push transform, alpha and line dash
    fn save(&mut self);

    /// Pop the state pushed by the matching [`Surface::save`]
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate clockwise by `degrees`
    fn rotate(&mut self, degrees: f64);

    fn set_global_alpha(&mut self, alpha: f64);

    /// Dash pattern for subsequent strokes; empty means solid
    fn set_line_dash(&mut self, segments: &[f64]);

    fn fill_rect(&mut self, rect: BoundingBox, radius: f64, color: &Color);

    fn stroke_rect(&mut self, rect: BoundingBox, radius: f64, color: &Color, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &Color, width: f64);

    fn stroke_line(&mut self, from: Point, to: Point, color: &Color, width: f64);

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        font: &FontSpec,
        align: TextAlign,
        baseline: TextBaseline,
        color: &Color,
    );

    /// Width `text` would occupy when drawn with `font`
    fn measure_text(&self, text: &str, font: &FontSpec) -> f64 {
        estimate_text_width(text, font.size)
    }
}
