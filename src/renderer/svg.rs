//! SVG surface: turns surface calls into an SVG document
//!
//! Canvas-style state (transform stack, global alpha, line dash) is flattened into
//! per-element `transform`, `opacity` and `stroke-dasharray` attributes.

use crate::geometry::{BoundingBox, Point, Size};
use crate::style::{Color, FontSpec, FontStyle, FontWeight, TextAlign, TextBaseline};

use super::surface::Surface;
use super::SvgConfig;

#[derive(Debug, Clone)]
struct PaintState {
    transform: Vec<String>,
    alpha: f64,
    dash: Vec<f64>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            transform: vec![],
            alpha: 1.0,
            dash: vec![],
        }
    }
}

/// Build an SVG document incrementally through the [`Surface`] API
#[derive(Debug, Clone)]
pub struct SvgSurface {
    config: SvgConfig,
    device: Size,
    display: Size,
    state: PaintState,
    stack: Vec<PaintState>,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            device: Size::default(),
            display: Size::default(),
            state: PaintState::default(),
            stack: vec![],
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// `transform` and `opacity` attributes for the current state
    fn state_attrs(&self) -> String {
        let mut attrs = String::new();
        if !self.state.transform.is_empty() {
            attrs.push_str(&format!(
                r#" transform="{}""#,
                self.state.transform.join(" ")
            ));
        }
        if self.state.alpha < 1.0 {
            attrs.push_str(&format!(r#" opacity="{}""#, self.state.alpha));
        }
        attrs
    }

    fn stroke_attrs(&self, color: &Color, width: f64) -> String {
        let mut attrs = format!(
            r#" fill="none" stroke="{}" stroke-width="{}""#,
            escape_xml(color.as_str()),
            width
        );
        if !self.state.dash.is_empty() {
            let dash = self
                .state
                .dash
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(",");
            attrs.push_str(&format!(r#" stroke-dasharray="{}""#, dash));
        }
        attrs
    }

    fn push_element(&mut self, element: String) {
        let line = format!("{}{}", self.indent_str(), element);
        self.elements.push(line);
    }

    fn rect_element(&self, class: &str, rect: BoundingBox, radius: f64, paint: &str) -> String {
        let rx = if radius > 0.0 {
            format!(r#" rx="{}""#, radius)
        } else {
            String::new()
        };
        format!(
            r#"<rect class="{}{}" x="{}" y="{}" width="{}" height="{}"{}{}{}/>"#,
            self.prefix(),
            class,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            rx,
            paint,
            self.state_attrs()
        )
    }

    fn circle_element(&self, center: Point, radius: f64, paint: &str) -> String {
        format!(
            r#"<circle class="{}circle" cx="{}" cy="{}" r="{}"{}{}/>"#,
            self.prefix(),
            center.x,
            center.y,
            radius,
            paint,
            self.state_attrs()
        )
    }

    /// Render the document drawn so far
    pub fn to_svg(&self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.device.width, self.device.height, self.device.width, self.device.height
        ));
        svg.push_str(nl);

        if let Some(background) = &self.config.background {
            svg.push_str(&format!(
                r#"{}<rect class="{}background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
                self.indent_str(),
                self.prefix(),
                self.device.width,
                self.device.height,
                escape_xml(background.as_str())
            ));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SvgConfig::default())
    }
}

impl Surface for SvgSurface {
    fn resize(&mut self, device: Size, display: Size) {
        self.device = device;
        self.display = display;
    }

    fn display_size(&self) -> Size {
        self.display
    }

    fn clear(&mut self) {
        self.elements.clear();
        self.stack.clear();
        self.state = PaintState::default();
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform.push(format!("translate({} {})", dx, dy));
    }

    fn rotate(&mut self, degrees: f64) {
        self.state.transform.push(format!("rotate({})", degrees));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.state.dash = segments.to_vec();
    }

    fn fill_rect(&mut self, rect: BoundingBox, radius: f64, color: &Color) {
        let paint = format!(r#" fill="{}""#, escape_xml(color.as_str()));
        let element = self.rect_element("rect", rect, radius, &paint);
        self.push_element(element);
    }

    fn stroke_rect(&mut self, rect: BoundingBox, radius: f64, color: &Color, width: f64) {
        let paint = self.stroke_attrs(color, width);
        let element = self.rect_element("outline", rect, radius, &paint);
        self.push_element(element);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &Color) {
        let paint = format!(r#" fill="{}""#, escape_xml(color.as_str()));
        let element = self.circle_element(center, radius, &paint);
        self.push_element(element);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: &Color, width: f64) {
        let paint = self.stroke_attrs(color, width);
        let element = self.circle_element(center, radius, &paint);
        self.push_element(element);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: &Color, width: f64) {
        let element = format!(
            r#"<line class="{}line" x1="{}" y1="{}" x2="{}" y2="{}"{}{}/>"#,
            self.prefix(),
            from.x,
            from.y,
            to.x,
            to.y,
            self.stroke_attrs(color, width),
            self.state_attrs()
        );
        self.push_element(element);
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
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        let dominant = match baseline {
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "text-after-edge",
        };
        let mut font_attrs = format!(
            r#" font-family="{}" font-size="{}""#,
            escape_xml(&font.family),
            font.size
        );
        if font.weight != FontWeight::Normal {
            font_attrs.push_str(&format!(r#" font-weight="{}""#, font.weight.as_css()));
        }
        if font.style != FontStyle::Normal {
            font_attrs.push_str(&format!(r#" font-style="{}""#, font.style.as_css()));
        }

        let element = format!(
            r#"<text class="{}text" x="{}" y="{}"{} text-anchor="{}" dominant-baseline="{}" fill="{}"{}>{}</text>"#,
            self.prefix(),
            at.x,
            at.y,
            font_attrs,
            anchor,
            dominant,
            escape_xml(color.as_str()),
            self.state_attrs(),
            escape_xml(text)
        );
        self.push_element(element);
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> SvgSurface {
        SvgSurface::new(
            SvgConfig::default()
                .with_standalone(false)
                .with_pretty_print(false)
                .with_background(None),
        )
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_document_frame() {
        let mut surface = SvgSurface::default();
        surface.resize(Size::new(100.0, 60.0), Size::new(50.0, 30.0));
        let svg = surface.to_svg();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="100" height="60" viewBox="0 0 100 60""#));
        assert!(svg.contains("ld-background"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_state_flattens_into_attributes() {
        let mut surface = compact();
        surface.save();
        surface.translate(5.0, 5.0);
        surface.rotate(90.0);
        surface.set_global_alpha(0.5);
        surface.fill_rect(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.0, &Color::black());
        surface.restore();
        surface.fill_rect(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 2.0, &Color::black());

        let svg = surface.to_svg();
        assert!(svg.contains(r#"transform="translate(5 5) rotate(90)" opacity="0.5""#));
        assert!(svg.contains(r##"rx="2" fill="#000000"/>"##));
        assert_eq!(svg.matches("transform=").count(), 1);
    }

    #[test]
    fn test_dashed_stroke() {
        let mut surface = compact();
        surface.set_line_dash(&[5.0, 5.0]);
        surface.stroke_rect(BoundingBox::new(1.0, 1.0, 4.0, 4.0), 0.0, &Color::new("#0066ff"), 2.0);
        let svg = surface.to_svg();
        assert!(svg.contains(r#"stroke-dasharray="5,5""#));
        assert!(svg.contains("ld-outline"));
    }

    #[test]
    fn test_text_element() {
        let mut surface = compact();
        let font = FontSpec::new(12.0, "Arial").with_weight(FontWeight::Bold);
        surface.fill_text(
            "R&D",
            Point::new(10.0, 20.0),
            &font,
            TextAlign::Center,
            TextBaseline::Top,
            &Color::black(),
        );
        let svg = surface.to_svg();
        insta::assert_snapshot!(
            svg,
            @r##"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0" viewBox="0 0 0 0"><text class="ld-text" x="10" y="20" font-family="Arial" font-size="12" font-weight="bold" text-anchor="middle" dominant-baseline="hanging" fill="#000000">R&amp;D</text></svg>"##
        );
    }

    #[test]
    fn test_clear_resets_state() {
        let mut surface = compact();
        surface.translate(3.0, 3.0);
        surface.fill_circle(Point::new(1.0, 1.0), 1.0, &Color::black());
        surface.clear();
        surface.fill_circle(Point::new(1.0, 1.0), 1.0, &Color::black());
        let svg = surface.to_svg();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(!svg.contains("transform"));
    }
}
