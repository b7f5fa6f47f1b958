//! Label data model: elements and the template aggregate that owns them

pub mod element;
pub mod template;

pub use element::{ElementId, ElementKind, ElementPatch, LabelElement};
pub use template::{paint_order, LabelTemplate, TemplateType};
