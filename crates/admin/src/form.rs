use model::{RecordKind, ResourceCategory};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{AdminError, AdminResult};

/// Required and optional field names for one record kind's admin form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl FieldSpec {
    pub fn for_kind(kind: RecordKind) -> FieldSpec {
        match kind {
            RecordKind::Events => FieldSpec {
                required: &["title", "location", "event_date"],
                optional: &["image_url", "description"],
            },
            RecordKind::Sermons => FieldSpec {
                required: &["title", "date_preached", "video_url"],
                optional: &["preacher", "description"],
            },
            RecordKind::Resources => FieldSpec {
                required: &["title", "category", "file_url"],
                optional: &["image_url", "description"],
            },
        }
    }

    fn accepts(&self, field: &str) -> bool {
        self.required.contains(&field) || self.optional.contains(&field)
    }
}

/// Raw admin-form input: field name to raw string value, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field (builder pattern).
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validate form input for a kind and build the persistence payload.
///
/// Required fields must be present and non-blank. Empty optional fields
/// become explicit JSON nulls, so "left blank" is never persisted as an
/// empty string. Unknown field names and unknown resource categories are
/// rejected here, before anything reaches the gateway.
pub fn validate(kind: RecordKind, form: &FormValues) -> AdminResult<Value> {
    let spec = FieldSpec::for_kind(kind);

    for name in form.values.keys() {
        if !spec.accepts(name) {
            return Err(AdminError::UnknownField(name.clone()));
        }
    }

    let mut payload = Map::new();

    for &name in spec.required {
        let value = form.get(name).map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(AdminError::validation(name));
        }
        payload.insert(name.to_string(), Value::String(value.to_string()));
    }

    if kind == RecordKind::Resources {
        // Non-blank at this point; constrain it to the fixed set.
        let category = form.get("category").map(str::trim).unwrap_or_default();
        if ResourceCategory::from_str(category).is_err() {
            return Err(AdminError::UnknownCategory(category.to_string()));
        }
    }

    for &name in spec.optional {
        let value = form.get(name).map(str::trim).unwrap_or_default();
        if value.is_empty() {
            payload.insert(name.to_string(), Value::Null);
        } else {
            payload.insert(name.to_string(), Value::String(value.to_string()));
        }
    }

    Ok(Value::Object(payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_form() -> FormValues {
        FormValues::new()
            .field("title", "Easter Service")
            .field("location", "Main Hall")
            .field("event_date", "2024-04-01T18:00")
    }

    #[test]
    fn test_valid_event_form() {
        let payload = validate(RecordKind::Events, &event_form()).unwrap();
        assert_eq!(payload["title"], json!("Easter Service"));
        assert_eq!(payload["image_url"], Value::Null);
        assert_eq!(payload["description"], Value::Null);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let form = FormValues::new().field("title", "Easter Service");
        let err = validate(RecordKind::Events, &form).unwrap_err();
        assert!(matches!(err, AdminError::Validation { .. }));
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let form = event_form().field("location", "   ");
        let err = validate(RecordKind::Events, &form).unwrap_err();
        assert!(matches!(err, AdminError::Validation { field } if field == "location"));
    }

    #[test]
    fn test_empty_optional_field_becomes_null() {
        let form = event_form().field("image_url", "");
        let payload = validate(RecordKind::Events, &form).unwrap();
        assert_eq!(payload["image_url"], Value::Null);
    }

    #[test]
    fn test_filled_optional_field_is_kept() {
        let form = event_form().field("image_url", "https://example.com/a.jpg");
        let payload = validate(RecordKind::Events, &form).unwrap();
        assert_eq!(payload["image_url"], json!("https://example.com/a.jpg"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let form = event_form().field("video_url", "https://youtu.be/x");
        let err = validate(RecordKind::Events, &form).unwrap_err();
        assert!(matches!(err, AdminError::UnknownField(field) if field == "video_url"));
    }

    #[test]
    fn test_resource_category_is_constrained() {
        let form = FormValues::new()
            .field("title", "Lesson 1")
            .field("category", "Knitting Circle")
            .field("file_url", "https://drive.google.com/file/d/abc/view");
        let err = validate(RecordKind::Resources, &form).unwrap_err();
        assert!(matches!(err, AdminError::UnknownCategory(_)));
    }

    #[test]
    fn test_valid_resource_form() {
        let form = FormValues::new()
            .field("title", "Lesson 1")
            .field("category", "Sunday School")
            .field("file_url", "https://drive.google.com/file/d/abc/view");
        let payload = validate(RecordKind::Resources, &form).unwrap();
        assert_eq!(payload["category"], json!("Sunday School"));
    }

    #[test]
    fn test_validation_errors_are_inline() {
        let err = validate(RecordKind::Events, &FormValues::new()).unwrap_err();
        assert!(err.is_validation());
    }
}
