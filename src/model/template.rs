//! The label template aggregate

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

use super::element::{ElementId, LabelElement};

pub const DEFAULT_LABEL_WIDTH_MM: f64 = 50.0;
pub const DEFAULT_LABEL_HEIGHT_MM: f64 = 30.0;

/// Business category of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Product,
    Invoice,
    Repair,
    /// Also absorbs any unrecognised stored value
    #[default]
    #[serde(other)]
    Custom,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Product => "product",
            TemplateType::Invoice => "invoice",
            TemplateType::Repair => "repair",
            TemplateType::Custom => "custom",
        }
    }
}

/// A named, sized collection of elements.
///
/// The `design` sequence is only changed through [`crate::LabelDesigner`]; readers get
/// a slice. Insertion order is preserved and breaks ties between equal z-indices.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTemplate {
    pub id: Option<String>,
    pub name: String,
    pub kind: TemplateType,
    /// Label width in millimeters
    pub width: f64,
    /// Label height in millimeters
    pub height: f64,
    pub(crate) design: Vec<LabelElement>,
    pub is_default: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub print_count: Option<u64>,
}

impl Default for LabelTemplate {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            kind: TemplateType::Custom,
            width: DEFAULT_LABEL_WIDTH_MM,
            height: DEFAULT_LABEL_HEIGHT_MM,
            design: Vec::new(),
            is_default: false,
            created_at: None,
            updated_at: None,
            print_count: None,
        }
    }
}

impl LabelTemplate {
    pub fn new(name: impl Into<String>, kind: TemplateType, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the whole design, keeping the given order
    pub fn with_design(mut self, design: Vec<LabelElement>) -> Self {
        self.design = design;
        self
    }

    /// Logical size in millimeters
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Elements in insertion order
    pub fn elements(&self) -> &[LabelElement] {
        &self.design
    }

    pub fn element(&self, id: &ElementId) -> Option<&LabelElement> {
        self.design.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.design.len()
    }

    pub fn is_empty(&self) -> bool {
        self.design.is_empty()
    }

    pub(crate) fn position_of(&self, id: &ElementId) -> Option<usize> {
        self.design.iter().position(|e| &e.id == id)
    }
}

/// Elements sorted by ascending z-index.
///
/// The sort is stable, so equal z-indices keep their insertion order.
pub fn paint_order(elements: &[LabelElement]) -> Vec<&LabelElement> {
    let mut ordered: Vec<&LabelElement> = elements.iter().collect();
    ordered.sort_by_key(|e| e.z_index);
    ordered
}
