//! Rendering: the drawing-surface abstraction, the paint pipeline and the
//! surfaces it can target.

pub mod canvas;
pub mod config;
pub mod draw;
pub mod recording;
pub mod surface;
pub mod svg;

pub use canvas::LabelCanvas;
pub use config::SvgConfig;
pub use draw::{render, render_elements};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::Surface;
pub use svg::SvgSurface;
