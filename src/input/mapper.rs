//! Mapper implementations for converting input DTOs into contract models
//!
//! Identifiers come from the map keys of the definition tree, so a field
//! can never lack an identity. Scalar JSON values are coerced to the
//! uniform string representation the validation engine operates on.

use indexmap::IndexMap;

use crate::contract::{FieldDefinition, FieldType, SectionDefinition, SettingsError};

use super::dto::{FieldInput, SectionInput};

/// Coerce a scalar JSON value into the engine's string representation
///
/// Booleans map to "1"/"" so checkbox values behave as truthy/empty,
/// null maps to the empty string. Arrays and objects are rejected.
fn scalar_to_string(field_id: &str, value: serde_json::Value) -> Result<String, SettingsError> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(true) => Ok("1".to_string()),
        serde_json::Value::Bool(false) => Ok(String::new()),
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            Err(SettingsError::Value {
                field_id: field_id.to_string(),
            })
        }
    }
}

/// Build a field definition, assigning `field_id` from its map key
pub(crate) fn build_field(
    field_id: &str,
    input: FieldInput,
) -> Result<FieldDefinition, SettingsError> {
    let kind = input
        .kind
        .as_deref()
        .map(FieldType::parse)
        .unwrap_or_default();

    let validation = input
        .validation
        .as_deref()
        .map(|rules| rules.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let value = match input.value {
        Some(v) => scalar_to_string(field_id, v)?,
        None => String::new(),
    };

    let mut options = IndexMap::new();
    for (label, opt_value) in input.options {
        let opt_value = scalar_to_string(field_id, opt_value)?;
        options.insert(label, opt_value);
    }

    Ok(FieldDefinition {
        id: field_id.to_string(),
        title: input.title,
        kind,
        validation,
        css_class: input.css_class,
        value,
        options,
        description: input.description,
        tooltip: input.tooltip,
        after_text: input.after_text,
        custom_error: input.custom_error,
    })
}

/// Build a section definition, assigning `section_id` from its map key
pub(crate) fn build_section(
    section_id: &str,
    input: SectionInput,
) -> Result<SectionDefinition, SettingsError> {
    let mut fields = IndexMap::with_capacity(input.fields.len());
    for (field_id, field_input) in input.fields {
        let field = build_field(&field_id, field_input)?;
        fields.insert(field_id, field);
    }

    Ok(SectionDefinition {
        id: section_id.to_string(),
        title: input.title,
        description: input.description,
        fields,
    })
}
