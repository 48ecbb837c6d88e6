//! Input DTOs with serde derives for the schema definition tree

use indexmap::IndexMap;
use serde::Deserialize;

/// Caller-supplied schema definition
///
/// `IndexMap` keys double as section/field identifiers; their insertion
/// order is the display and validation traversal order.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaInput {
    /// Page the form is rendered on
    pub page: String,

    /// Settings group name
    pub group: String,

    /// Persistence key namespace the values are stored under
    pub option_name: String,

    /// section_id -> section definition
    pub sections: IndexMap<String, SectionInput>,
}

/// One settings section
#[derive(Debug, Clone, Deserialize)]
pub struct SectionInput {
    /// Section heading
    #[serde(default)]
    pub title: String,

    /// Description displayed with the section
    #[serde(default)]
    pub description: Option<String>,

    /// field_id -> field definition
    #[serde(default)]
    pub fields: IndexMap<String, FieldInput>,
}

/// One settings field
///
/// Every attribute is optional; absent attributes take the documented
/// defaults (`type` -> text, `value` -> empty string).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldInput {
    /// Display label
    #[serde(default)]
    pub title: String,

    /// Control type tag; unrecognized tags fall back to text
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// Space-delimited validation rule specifiers
    #[serde(default)]
    pub validation: Option<String>,

    /// Extra CSS class for the control
    #[serde(default, rename = "class")]
    pub css_class: Option<String>,

    /// Current value; scalar JSON only
    #[serde(default)]
    pub value: Option<serde_json::Value>,

    /// Display-label -> value pairs for select/radio controls
    #[serde(default)]
    pub options: IndexMap<String, serde_json::Value>,

    /// Help text shown with the control
    #[serde(default)]
    pub description: Option<String>,

    /// Hover text for the control label
    #[serde(default)]
    pub tooltip: Option<String>,

    /// Text appended after the control
    #[serde(default)]
    pub after_text: Option<String>,

    /// Message used verbatim when the `regex` rule fails
    #[serde(default, rename = "error")]
    pub custom_error: Option<String>,
}
