//! Label elements: one positioned, styled primitive each

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{BoundingBox, Point, Size};
use crate::style::{Color, FontStyle, FontWeight, TextAlign, TextDecoration};

/// Where new elements are placed, in millimeters
pub const DEFAULT_ELEMENT_ORIGIN: Point = Point { x: 10.0, y: 10.0 };

/// Font size given to freshly added text elements
pub const DEFAULT_TEXT_FONT_SIZE: f64 = 12.0;

/// Opaque element identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of primitives a label can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Barcode,
    Qr,
    Line,
    Rectangle,
    Circle,
}

impl ElementKind {
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Barcode,
        ElementKind::Qr,
        ElementKind::Line,
        ElementKind::Rectangle,
        ElementKind::Circle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Image => "image",
            ElementKind::Barcode => "barcode",
            ElementKind::Qr => "qr",
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
        }
    }

    /// Size in millimeters given to a newly added element
    pub fn default_size(&self) -> Size {
        match self {
            ElementKind::Text => Size::new(100.0, 20.0),
            _ => Size::new(50.0, 50.0),
        }
    }

    /// Placeholder content given to a newly added element
    pub fn placeholder_content(&self) -> &'static str {
        match self {
            ElementKind::Text => "Sample Text",
            _ => "Sample",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One graphical primitive on a label.
///
/// Style attributes are optional; their defaults are applied when rendering so a
/// stored element never carries values it was not explicitly given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelElement {
    #[serde(default = "ElementId::generate")]
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(flatten)]
    pub position: Point,
    #[serde(flatten)]
    pub size: Size,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub z_index: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// Degrees clockwise about the bounding-box center
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// 0.0 (invisible) to 1.0 (opaque)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl LabelElement {
    /// Create an element of `kind` with its placeholder size and content
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: ElementId::generate(),
            kind,
            position: DEFAULT_ELEMENT_ORIGIN,
            size: kind.default_size(),
            content: kind.placeholder_content().to_string(),
            z_index: 0,
            font_size: (kind == ElementKind::Text).then_some(DEFAULT_TEXT_FONT_SIZE),
            font_family: None,
            font_weight: None,
            font_style: None,
            text_decoration: None,
            text_align: None,
            color: None,
            background_color: None,
            border_color: None,
            border_width: None,
            border_radius: None,
            rotation: None,
            opacity: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = z_index;
        self
    }

    /// Logical (millimeter) bounding box, ignoring rotation
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_parts(self.position, self.size)
    }

    /// Rotation in degrees, `None` when absent or zero
    pub fn effective_rotation(&self) -> Option<f64> {
        self.rotation.filter(|r| r.is_finite() && *r != 0.0)
    }

    /// Opacity clamped to `[0, 1]`, defaulting to fully opaque
    pub fn effective_opacity(&self) -> f64 {
        match self.opacity {
            Some(o) if o.is_finite() => o.clamp(0.0, 1.0),
            _ => 1.0,
        }
    }
}

/// A partial update: every field of [`LabelElement`] except `id`, all optional.
///
/// Deserializes from the same camelCase keys a stored element uses, so a host
/// can forward `{"x": 5, "content": "HELLO"}` straight from a property panel.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(rename = "type")]
    pub kind: Option<ElementKind>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<String>,
    pub z_index: Option<i64>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_decoration: Option<TextDecoration>,
    pub text_align: Option<TextAlign>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn z_index(mut self, z_index: i64) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// True when applying this patch would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the present fields into `element`, leaving the rest untouched
    pub fn apply(&self, element: &mut LabelElement) {
        if let Some(kind) = self.kind {
            element.kind = kind;
        }
        if let Some(x) = self.x {
            element.position.x = x;
        }
        if let Some(y) = self.y {
            element.position.y = y;
        }
        if let Some(width) = self.width {
            element.size.width = width;
        }
        if let Some(height) = self.height {
            element.size.height = height;
        }
        if let Some(content) = &self.content {
            element.content = content.clone();
        }
        if let Some(z_index) = self.z_index {
            element.z_index = z_index;
        }
        merge(&mut element.font_size, &self.font_size);
        merge(&mut element.font_family, &self.font_family);
        merge(&mut element.font_weight, &self.font_weight);
        merge(&mut element.font_style, &self.font_style);
        merge(&mut element.text_decoration, &self.text_decoration);
        merge(&mut element.text_align, &self.text_align);
        merge(&mut element.color, &self.color);
        merge(&mut element.background_color, &self.background_color);
        merge(&mut element.border_color, &self.border_color);
        merge(&mut element.border_width, &self.border_width);
        merge(&mut element.border_radius, &self.border_radius);
        merge(&mut element.rotation, &self.rotation);
        merge(&mut element.opacity, &self.opacity);
    }
}

fn merge<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
    if value.is_some() {
        target.clone_from(value);
    }
}
