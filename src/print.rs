//! Hand-off to the print collaborator
//!
//! A print job is the sanitized template record plus an arbitrary JSON payload
//! (customer, job and device fields). Text content may reference payload fields
//! as `{{key}}`; [`PrintJob::resolved_design`] substitutes them.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{LabelElement, LabelTemplate};
use crate::persist::{self, TemplateRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    pub template: TemplateRecord,
    pub data: Value,
}

/// Package `template` and `data` for printing
pub fn print(template: &LabelTemplate, data: Value) -> PrintJob {
    PrintJob {
        template: persist::save(template),
        data,
    }
}

impl PrintJob {
    /// The design with `{{key}}` placeholders filled from the payload's top-level fields
    pub fn resolved_design(&self) -> Vec<LabelElement> {
        let fields = self.data.as_object();
        self.template
            .design
            .iter()
            .map(|element| {
                let mut element = element.clone();
                if let Some(fields) = fields {
                    element.content = merge_fields(&element.content, fields);
                }
                element
            })
            .collect()
    }

    /// A template carrying the resolved design, ready to render
    pub fn resolved_template(&self) -> LabelTemplate {
        let mut record = self.template.clone();
        record.design = self.resolved_design();
        persist::load(record)
    }
}

/// Replace every `{{key}}` whose key is a scalar field of `fields`.
/// Unknown keys and unterminated braces are left as written.
pub fn merge_fields(content: &str, fields: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after[..end].trim();
        match fields.get(key).and_then(scalar_text) {
            Some(text) => out.push_str(&text),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementKind, TemplateType};
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_fields() {
        let data = fields(json!({"customer": "Ada", "job": 42, "paid": true}));
        assert_eq!(
            merge_fields("{{customer}} / #{{ job }} / {{paid}}", &data),
            "Ada / #42 / true"
        );
    }

    #[test]
    fn test_merge_leaves_unknown_and_unterminated() {
        let data = fields(json!({"a": "x", "nested": {"b": 1}}));
        assert_eq!(merge_fields("{{missing}}-{{a}}", &data), "{{missing}}-x");
        assert_eq!(merge_fields("{{nested}}", &data), "{{nested}}");
        assert_eq!(merge_fields("tail {{a", &data), "tail {{a");
        assert_eq!(merge_fields("no braces", &data), "no braces");
    }

    #[test]
    fn test_print_job_resolves_and_sanitizes() {
        let text = LabelElement::new(ElementKind::Text).with_content("Job {{job}}");
        let barcode = LabelElement::new(ElementKind::Barcode).with_content("{{job}}");
        let template = LabelTemplate::new("", TemplateType::Repair, 5.0, 40.0)
            .with_design(vec![text, barcode]);

        let job = print(&template, json!({"job": "R-1001"}));
        assert!(!job.template.name.is_empty());
        assert_eq!(job.template.width, 10.0);

        let contents: Vec<String> = job
            .resolved_design()
            .into_iter()
            .map(|e| e.content)
            .collect();
        assert_eq!(contents, vec!["Job R-1001", "R-1001"]);
        // The packaged record itself is untouched
        assert_eq!(job.template.design[0].content, "Job {{job}}");
        assert_eq!(job.resolved_template().elements()[0].content, "Job R-1001");
    }

    #[test]
    fn test_non_object_payload_changes_nothing() {
        let template = LabelTemplate::default()
            .with_design(vec![LabelElement::new(ElementKind::Text).with_content("{{x}}")]);
        let job = print(&template, json!([1, 2, 3]));
        assert_eq!(job.resolved_design()[0].content, "{{x}}");
    }
}
