//! Label Designer - composition and rendering engine for printable labels
//!
//! A label is a [`LabelTemplate`]: a millimeter-sized collection of positioned,
//! styled [`LabelElement`]s. [`LabelDesigner`] is the only writer of that collection,
//! the renderer paints it onto any [`Surface`] at a given zoom, hit-testing maps
//! pointer positions back to elements, and [`persist`] converts templates to and
//! from the stored record shape.
//!
//! # Example
//!
//! ```rust
//! use label_designer::{render_svg, ElementKind, LabelDesigner, RenderConfig};
//!
//! let mut designer = LabelDesigner::default();
//! designer.add(ElementKind::Text);
//!
//! let svg = render_svg(designer.template(), designer.view(), &RenderConfig::default());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Sample Text"));
//! ```

pub mod config;
pub mod designer;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod model;
pub mod persist;
pub mod print;
pub mod renderer;
pub mod style;
pub mod view;

pub use config::RenderConfig;
pub use designer::LabelDesigner;
pub use error::LabelError;
pub use geometry::{BoundingBox, Point, Size};
pub use model::{ElementId, ElementKind, ElementPatch, LabelElement, LabelTemplate, TemplateType};
pub use persist::{load, save, TemplateRecord};
pub use print::{print, PrintJob};
pub use renderer::{LabelCanvas, RecordingSurface, Surface, SvgConfig, SvgSurface};
pub use style::Color;
pub use view::{ViewState, Zoom};

/// Render a template to an SVG document
pub fn render_svg(template: &LabelTemplate, view: &ViewState, config: &RenderConfig) -> String {
    let mut surface = SvgSurface::new(config.svg.clone());
    renderer::render(&mut surface, template, view, config);
    surface.to_svg()
}

/// Render a stored template record (JSON) to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use label_designer::render_json;
///
/// let svg = render_json(r#"{
///     "name": "Shelf",
///     "width": 60,
///     "height": 30,
///     "design": [{"id": "t", "type": "text", "x": 2, "y": 2, "width": 50, "height": 8, "content": "Price"}]
/// }"#).unwrap();
///
/// assert!(svg.contains("Price"));
/// ```
pub fn render_json(source: &str) -> Result<String, LabelError> {
    render_json_with_config(source, &ViewState::default(), &RenderConfig::default())
}

/// Render a stored template record (JSON) to SVG with custom view and configuration
pub fn render_json_with_config(
    source: &str,
    view: &ViewState,
    config: &RenderConfig,
) -> Result<String, LabelError> {
    let template = persist::load_json(source)?;
    Ok(render_svg(&template, view, config))
}
