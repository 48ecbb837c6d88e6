//! Contract models for the form engine
//!
//! These models are transport-agnostic and shared by the validation and
//! rendering layers. NO serde derives - these are pure domain models;
//! the serde boundary lives in `crate::input` and `crate::render`.

use indexmap::IndexMap;

/// Recognized field control kinds
///
/// Unrecognized or missing type tags fall back to `Text` by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    Password,
    Select,
    Radio,
    Checkbox,
    Textarea,
    Button,
    /// Display-only field, no input control
    Message,
    /// Rendering is deferred to an external hook
    Custom,
    Datepicker,
    Timepicker,
    Image,
}

impl FieldType {
    /// Parse a type tag; anything unrecognized is `Text`, not an error
    pub fn parse(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "password" => Self::Password,
            "select" => Self::Select,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "textarea" => Self::Textarea,
            "button" => Self::Button,
            "message" => Self::Message,
            "custom" => Self::Custom,
            "datepicker" => Self::Datepicker,
            "timepicker" => Self::Timepicker,
            "image" => Self::Image,
            _ => Self::Text,
        }
    }

    /// Canonical tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Select => "select",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Textarea => "textarea",
            Self::Button => "button",
            Self::Message => "message",
            Self::Custom => "custom",
            Self::Datepicker => "datepicker",
            Self::Timepicker => "timepicker",
            Self::Image => "image",
        }
    }
}

/// A single named, typed input slot within a settings section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field identifier, assigned from its map key; unique within its
    /// owning section and immutable after construction
    pub id: String,
    /// Display label
    pub title: String,
    /// Control kind
    pub kind: FieldType,
    /// Ordered rule specifiers (`name` or `name:parameter` tokens)
    pub validation: Vec<String>,
    /// Extra CSS class for the rendered control
    pub css_class: Option<String>,
    /// Current value; mutable during a render/validate cycle
    pub value: String,
    /// Display-label -> value pairs for select/radio controls
    pub options: IndexMap<String, String>,
    /// Help text shown with the control
    pub description: Option<String>,
    /// Hover text for the control label
    pub tooltip: Option<String>,
    /// Text appended after the control
    pub after_text: Option<String>,
    /// Caller-supplied message used verbatim by the `regex` rule
    pub custom_error: Option<String>,
}

impl FieldDefinition {
    /// Whether the field's rule list contains `required`
    pub fn is_required(&self) -> bool {
        self.validation.iter().any(|r| r == "required")
    }
}

/// A named, ordered group of fields with a shared heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDefinition {
    /// Section identifier, assigned from its map key; unique within the page
    pub id: String,
    /// Section heading
    pub title: String,
    /// Description displayed with the section
    pub description: Option<String>,
    /// field_id -> definition; insertion order is the display order
    pub fields: IndexMap<String, FieldDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_type_tag_falls_back_to_text() {
        assert_eq!(FieldType::parse("text"), FieldType::Text);
        assert_eq!(FieldType::parse("datepicker"), FieldType::Datepicker);
        assert_eq!(FieldType::parse("bogus"), FieldType::Text);
        assert_eq!(FieldType::parse(""), FieldType::Text);
    }

    #[test]
    fn required_detection_scans_rule_tokens() {
        let mut field = FieldDefinition {
            id: "name".to_string(),
            title: "Name".to_string(),
            kind: FieldType::Text,
            validation: vec!["required".to_string(), "maxlen:10".to_string()],
            css_class: None,
            value: String::new(),
            options: IndexMap::new(),
            description: None,
            tooltip: None,
            after_text: None,
            custom_error: None,
        };
        assert!(field.is_required());

        field.validation = vec!["maxlen:10".to_string()];
        assert!(!field.is_required());
    }
}
