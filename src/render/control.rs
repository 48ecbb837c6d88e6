//! Control descriptions produced by the rendering adapter
//!
//! A control is a passive description of one rendered input: the target
//! UI decides tag and attribute syntax, so these types carry structure,
//! not markup. Serde derives live here because the description is a
//! boundary format, unlike the contract models.

use indexmap::IndexMap;
use serde::Serialize;

use crate::contract::FieldType;

/// Control kinds, one per recognized field type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Text,
    Password,
    Select,
    Radio,
    Checkbox,
    Textarea,
    Button,
    /// Label and description only, no input control
    Message,
    /// Markup comes from the registered custom renderer
    Custom,
    Datepicker,
    Timepicker,
    Image,
}

impl From<FieldType> for ControlKind {
    fn from(kind: FieldType) -> Self {
        match kind {
            FieldType::Text => Self::Text,
            FieldType::Password => Self::Password,
            FieldType::Select => Self::Select,
            FieldType::Radio => Self::Radio,
            FieldType::Checkbox => Self::Checkbox,
            FieldType::Textarea => Self::Textarea,
            FieldType::Button => Self::Button,
            FieldType::Message => Self::Message,
            FieldType::Custom => Self::Custom,
            FieldType::Datepicker => Self::Datepicker,
            FieldType::Timepicker => Self::Timepicker,
            FieldType::Image => Self::Image,
        }
    }
}

/// Description of one rendered input control
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    /// Control kind
    pub kind: ControlKind,

    /// Element id, the field id
    pub id: String,

    /// Submit name, `option_name[field_id]`
    pub name: String,

    /// Display label
    pub label: String,

    /// Whether the field's rule list contains `required`
    pub required: bool,

    /// Control attributes (class, value, checked, ...)
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,

    /// Display-label -> value pairs for select/radio controls
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, String>,

    /// Error annotations collected for this field
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    /// Help text shown with the control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hover text for the control label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Text appended after the control
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_text: Option<String>,

    /// External renderer output for custom fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
}
