//! Paints a template onto a [`Surface`]
//!
//! Rendering is a pure function of elements, label size, zoom and selection:
//! every call clears the surface and repaints everything.

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::geometry::{BoundingBox, Point, Size};
use crate::model::{paint_order, ElementKind, LabelElement, LabelTemplate};
use crate::style::{Color, FontSpec, TextAlign, TextBaseline, TextDecoration};
use crate::view::{CanvasMetrics, ViewState};

use super::surface::Surface;

/// White inset inside a barcode placeholder, in device pixels
const BARCODE_MARGIN_PX: f64 = 2.0;

/// Caption font size under a barcode placeholder, before zoom scaling
const BARCODE_CAPTION_SIZE: f64 = 8.0;

const BARCODE_CAPTION_FONT: &str = "monospace";

/// Module count per side of the QR placeholder pattern
const QR_MODULES: usize = 25;

/// Upper bound on grid lines per axis; unclamped label sizes can be arbitrarily large
const MAX_GRID_LINES: usize = 2048;

/// Render `template` as seen through `view`
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    template: &LabelTemplate,
    view: &ViewState,
    config: &RenderConfig,
) {
    render_elements(surface, template.elements(), template.size(), view, config);
}

/// Render `elements` on a label of `size` millimeters
pub fn render_elements<S: Surface + ?Sized>(
    surface: &mut S,
    elements: &[LabelElement],
    size: Size,
    view: &ViewState,
    config: &RenderConfig,
) {
    let metrics = CanvasMetrics::new(size, view.zoom);
    surface.resize(metrics.device_size(), metrics.display_size());
    surface.clear();

    if config.grid.enabled {
        draw_grid(surface, &metrics, config);
    }

    for element in paint_order(elements) {
        draw_element(surface, element, &metrics, view, config);
    }
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, metrics: &CanvasMetrics, config: &RenderConfig) {
    let step = config.grid.spacing_mm * metrics.scale;
    let device = metrics.device_size();
    if !step.is_finite() || step <= 0.0 || !device.width.is_finite() || !device.height.is_finite()
    {
        debug!(?device, step, "grid skipped");
        return;
    }

    surface.save();
    surface.set_line_dash(&config.grid.dash);

    for i in 0..grid_line_count(device.width, step) {
        let x = i as f64 * step;
        surface.stroke_line(
            Point::new(x, 0.0),
            Point::new(x, device.height),
            &config.grid.color,
            config.grid.line_width,
        );
    }

    for i in 0..grid_line_count(device.height, step) {
        let y = i as f64 * step;
        surface.stroke_line(
            Point::new(0.0, y),
            Point::new(device.width, y),
            &config.grid.color,
            config.grid.line_width,
        );
    }

    surface.restore();
}

/// Lines at `0, step, 2*step, ..` up to and including `extent`, capped at [`MAX_GRID_LINES`]
fn grid_line_count(extent: f64, step: f64) -> usize {
    if extent < 0.0 {
        return 0;
    }
    ((extent / step).floor() as usize)
        .saturating_add(1)
        .min(MAX_GRID_LINES)
}

fn draw_element<S: Surface + ?Sized>(
    surface: &mut S,
    element: &LabelElement,
    metrics: &CanvasMetrics,
    view: &ViewState,
    config: &RenderConfig,
) {
    let rect = metrics.to_device(element.bounds());
    let scale = metrics.scale;
    trace!(id = %element.id, kind = %element.kind, z_index = element.z_index, "drawing element");

    surface.save();

    if let Some(degrees) = element.effective_rotation() {
        let center = rect.center();
        surface.translate(center.x, center.y);
        surface.rotate(degrees);
        surface.translate(-center.x, -center.y);
    }
    surface.set_global_alpha(element.effective_opacity());

    match element.kind {
        ElementKind::Text => draw_text(surface, element, rect, scale, config),
        ElementKind::Barcode => draw_barcode(surface, element, rect, scale),
        ElementKind::Qr => draw_qr(surface, rect),
        ElementKind::Line => draw_line(surface, element, rect, scale, config),
        ElementKind::Rectangle => draw_rectangle(surface, element, rect, scale),
        ElementKind::Circle => draw_circle(surface, element, rect, scale),
        // Space is reserved; there is no image source to paint from
        ElementKind::Image => {}
    }

    if view.is_selected(&element.id) {
        surface.set_line_dash(&config.selection.dash);
        surface.stroke_rect(
            rect,
            0.0,
            &config.selection.color,
            config.selection.line_width,
        );
    }

    surface.restore();
}

fn draw_text<S: Surface + ?Sized>(
    surface: &mut S,
    element: &LabelElement,
    rect: BoundingBox,
    scale: f64,
    config: &RenderConfig,
) {
    let defaults = &config.text;
    let font = FontSpec::new(
        element.font_size.unwrap_or(defaults.font_size) * scale,
        element
            .font_family
            .clone()
            .unwrap_or_else(|| defaults.font_family.clone()),
    )
    .with_style(element.font_style.unwrap_or_default())
    .with_weight(element.font_weight.unwrap_or_default());
    let color = element.color.as_ref().unwrap_or(&defaults.color);
    let align = element.text_align.unwrap_or_default();

    let x = match align {
        TextAlign::Left => rect.x,
        TextAlign::Center => rect.x + rect.width / 2.0,
        TextAlign::Right => rect.right(),
    };
    surface.fill_text(
        &element.content,
        Point::new(x, rect.y),
        &font,
        align,
        TextBaseline::Top,
        color,
    );

    if element.text_decoration == Some(TextDecoration::Underline) {
        let width = surface.measure_text(&element.content, &font);
        let start = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let y = rect.y + font.size + scale;
        surface.stroke_line(
            Point::new(start, y),
            Point::new(start + width, y),
            color,
            scale,
        );
    }
}

fn draw_barcode<S: Surface + ?Sized>(
    surface: &mut S,
    element: &LabelElement,
    rect: BoundingBox,
    scale: f64,
) {
    surface.fill_rect(rect, 0.0, &Color::black());
    surface.fill_rect(rect.inset(BARCODE_MARGIN_PX), 0.0, &Color::white());

    let font = FontSpec::new(BARCODE_CAPTION_SIZE * scale, BARCODE_CAPTION_FONT);
    surface.fill_text(
        &element.content,
        Point::new(rect.center().x, rect.bottom() - BARCODE_MARGIN_PX),
        &font,
        TextAlign::Center,
        TextBaseline::Bottom,
        &Color::black(),
    );
}

/// Black square overlaid with a fixed checkerboard; independent of content
fn draw_qr<S: Surface + ?Sized>(surface: &mut S, rect: BoundingBox) {
    surface.fill_rect(rect, 0.0, &Color::black());

    let module_w = rect.width / QR_MODULES as f64;
    let module_h = rect.height / QR_MODULES as f64;
    let white = Color::white();
    for row in 0..QR_MODULES {
        for col in 0..QR_MODULES {
            if (row + col) % 2 == 0 {
                let module = BoundingBox::new(
                    rect.x + col as f64 * module_w,
                    rect.y + row as f64 * module_h,
                    module_w,
                    module_h,
                );
                surface.fill_rect(module, 0.0, &white);
            }
        }
    }
}

fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    element: &LabelElement,
    rect: BoundingBox,
    scale: f64,
    config: &RenderConfig,
) {
    let color = element.color.as_ref().unwrap_or(&config.text.color);
    let width = element.border_width.unwrap_or(1.0) * scale;
    surface.stroke_line(rect.top_left(), rect.bottom_right(), color, width);
}

fn draw_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    element: &LabelElement,
    rect: BoundingBox,
    scale: f64,
) {
    let radius = element.border_radius.unwrap_or(0.0).max(0.0) * scale;
    if let Some(fill) = fill_color(element) {
        surface.fill_rect(rect, radius, fill);
    }
    if let Some((stroke, width)) = stroke_paint(element, scale) {
        surface.stroke_rect(rect, radius, stroke, width);
    }
}

/// Circle inscribed in the bounding box
fn draw_circle<S: Surface + ?Sized>(
    surface: &mut S,
    element: &LabelElement,
    rect: BoundingBox,
    scale: f64,
) {
    let center = rect.center();
    let radius = rect.width.min(rect.height) / 2.0;
    if let Some(fill) = fill_color(element) {
        surface.fill_circle(center, radius, fill);
    }
    if let Some((stroke, width)) = stroke_paint(element, scale) {
        surface.stroke_circle(center, radius, stroke, width);
    }
}

fn fill_color(element: &LabelElement) -> Option<&Color> {
    element
        .background_color
        .as_ref()
        .filter(|c| !c.is_transparent())
}

fn stroke_paint(element: &LabelElement, scale: f64) -> Option<(&Color, f64)> {
    let color = element
        .border_color
        .as_ref()
        .filter(|c| !c.is_transparent())?;
    let width = element.border_width.unwrap_or(1.0);
    (width > 0.0).then_some((color, width * scale))
}
