//! Conversion between [`LabelTemplate`] and the persisted record handed to storage
//!
//! Saving always sanitizes: dimensions are clamped to `[10, 1000]` millimeters and a
//! blank name is replaced by a timestamped placeholder. Loading accepts stored
//! elements as they are and skips the ones it cannot decode.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::LabelError;
use crate::model::template::{DEFAULT_LABEL_HEIGHT_MM, DEFAULT_LABEL_WIDTH_MM};
use crate::model::{LabelElement, LabelTemplate, TemplateType};

pub const MIN_DIMENSION_MM: f64 = 10.0;
pub const MAX_DIMENSION_MM: f64 = 1000.0;

/// The persisted shape of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: TemplateType,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default, deserialize_with = "deserialize_design")]
    pub design: Vec<LabelElement>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub print_count: Option<u64>,
}

fn default_width() -> f64 {
    DEFAULT_LABEL_WIDTH_MM
}

fn default_height() -> f64 {
    DEFAULT_LABEL_HEIGHT_MM
}

/// Decode stored elements one at a time; an element that does not decode (for
/// instance an unknown `type`) is dropped with a warning instead of failing the record.
fn deserialize_design<'de, D>(deserializer: D) -> Result<Vec<LabelElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(element) => Some(element),
            Err(error) => {
                warn!(index, %error, "skipping stored element");
                None
            }
        })
        .collect())
}

impl TemplateRecord {
    pub fn from_json(source: &str) -> Result<Self, LabelError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, LabelError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, LabelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Clamp a label dimension into `[MIN_DIMENSION_MM, MAX_DIMENSION_MM]`; NaN maps to the minimum
pub fn clamp_dimension(value: f64) -> f64 {
    if value.is_nan() {
        MIN_DIMENSION_MM
    } else {
        value.clamp(MIN_DIMENSION_MM, MAX_DIMENSION_MM)
    }
}

/// Name given to templates saved without one
pub fn placeholder_name(now: DateTime<Local>) -> String {
    format!("Label {}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// Package `template` for storage, sanitizing it on the way
pub fn save(template: &LabelTemplate) -> TemplateRecord {
    save_at(template, Local::now())
}

/// [`save`] with an explicit clock for the name placeholder
pub fn save_at(template: &LabelTemplate, now: DateTime<Local>) -> TemplateRecord {
    let name = template.name.trim();
    let name = if name.is_empty() {
        placeholder_name(now)
    } else {
        name.to_string()
    };

    TemplateRecord {
        id: template.id.clone(),
        name,
        kind: template.kind,
        width: clamp_dimension(template.width),
        height: clamp_dimension(template.height),
        design: template.elements().to_vec(),
        is_default: template.is_default,
        created_at: template.created_at.clone(),
        updated_at: template.updated_at.clone(),
        print_count: template.print_count,
    }
}

/// Rebuild a template from a stored record
pub fn load(record: TemplateRecord) -> LabelTemplate {
    LabelTemplate {
        id: record.id,
        name: record.name,
        kind: record.kind,
        width: record.width,
        height: record.height,
        design: record.design,
        is_default: record.is_default,
        created_at: record.created_at,
        updated_at: record.updated_at,
        print_count: record.print_count,
    }
}

/// Parse a stored JSON record straight into a template
pub fn load_json(source: &str) -> Result<LabelTemplate, LabelError> {
    TemplateRecord::from_json(source).map(load)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementId, ElementKind};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_dimension() {
        assert_eq!(clamp_dimension(5.0), 10.0);
        assert_eq!(clamp_dimension(5000.0), 1000.0);
        assert_eq!(clamp_dimension(0.0), 10.0);
        assert_eq!(clamp_dimension(62.5), 62.5);
        assert_eq!(clamp_dimension(f64::NAN), 10.0);
        assert_eq!(clamp_dimension(f64::INFINITY), 1000.0);
    }

    #[test]
    fn test_save_sanitizes() {
        let now = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let template = LabelTemplate::new("   ", TemplateType::Repair, 2000.0, 0.0);
        let record = save_at(&template, now);
        assert_eq!(record.name, "Label 2024-03-09 14:05:00");
        assert_eq!(record.width, 1000.0);
        assert_eq!(record.height, 10.0);
        assert_eq!(record.kind, TemplateType::Repair);
    }

    #[test]
    fn test_save_keeps_valid_name_trimmed() {
        let template = LabelTemplate::new(" Shelf tag ", TemplateType::Product, 62.0, 29.0);
        let record = save(&template);
        assert_eq!(record.name, "Shelf tag");
        assert_eq!((record.width, record.height), (62.0, 29.0));
    }

    #[test]
    fn test_record_shape() {
        let element = LabelElement::new(ElementKind::Text);
        let template = LabelTemplate::new("Tag", TemplateType::Product, 50.0, 30.0)
            .with_design(vec![element]);
        let json = serde_json::to_value(save(&template)).unwrap();

        for key in [
            "name", "type", "width", "height", "design", "isDefault", "createdAt", "updatedAt",
            "printCount",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["type"], "product");
        assert_eq!(json["design"][0]["content"], "Sample Text");
    }

    #[test]
    fn test_load_accepts_sparse_record() {
        let template = load_json(
            r#"{
                "id": "t-1",
                "name": "Legacy",
                "type": "shipping",
                "width": 4,
                "height": 2000,
                "printCount": 7,
                "design": [{"id": "e-1", "type": "rectangle", "x": 1, "y": 2, "width": 3, "height": 4}]
            }"#,
        )
        .unwrap();

        assert_eq!(template.kind, TemplateType::Custom);
        // Dimensions are only clamped on save
        assert_eq!(template.width, 4.0);
        assert_eq!(template.height, 2000.0);
        assert_eq!(template.print_count, Some(7));
        let element = template.element(&ElementId::new("e-1")).unwrap();
        assert_eq!(element.background_color, None);
        assert_eq!(element.rotation, None);
    }

    #[test]
    fn test_load_generates_missing_element_ids() {
        let template =
            load_json(r#"{"design": [{"type": "text"}, {"type": "text"}]}"#).unwrap();
        let ids: Vec<_> = template.elements().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert!(!ids[0].as_str().is_empty());
        assert_eq!(template.size().width, DEFAULT_LABEL_WIDTH_MM);
    }

    #[test]
    fn test_load_skips_undecodable_elements() {
        let template = load_json(
            r#"{
                "name": "Mixed",
                "design": [
                    {"id": "a", "type": "text", "content": "kept"},
                    {"id": "b", "type": "hexagon"},
                    {"id": "c", "type": "circle", "x": "left"},
                    {"id": "d", "type": "qr"}
                ]
            }"#,
        )
        .unwrap();

        let ids: Vec<&str> = template.elements().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(template.elements()[0].content, "kept");
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        assert!(matches!(
            load_json("{\"design\": 3}"),
            Err(LabelError::Record(_))
        ));
    }

    #[test]
    fn test_save_load_preserves_metadata() {
        let mut template = LabelTemplate::new("Invoice", TemplateType::Invoice, 100.0, 150.0);
        template.id = Some("abc".to_string());
        template.is_default = true;
        template.created_at = Some("2024-01-01T00:00:00Z".to_string());
        template.print_count = Some(3);
        let restored = load(save(&template));
        assert_eq!(restored, template);
    }
}
