//! Rendering adapter
//!
//! Maps field definitions plus the request's accumulated errors into
//! control descriptions. Rendering never mutates field values; its only
//! side effect is reading error annotations out of the sink.

use indexmap::IndexMap;

use crate::contract::{FieldDefinition, FieldType};
use crate::domain::{ErrorSink, SettingsSchema};

use super::control::{Control, ControlKind};

/// External hook invoked for fields of type `custom`; the hook owns the
/// control markup entirely
pub trait CustomFieldRenderer: Send + Sync {
    /// Produce the markup for one custom field
    fn render(&self, field: &FieldDefinition) -> String;
}

/// Maps field definitions to control descriptions
#[derive(Default)]
pub struct RenderAdapter {
    custom_renderer: Option<Box<dyn CustomFieldRenderer>>,
}

impl RenderAdapter {
    /// Create an adapter without a custom-field hook
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter with a custom-field hook
    pub fn with_custom_renderer(renderer: impl CustomFieldRenderer + 'static) -> Self {
        Self {
            custom_renderer: Some(Box::new(renderer)),
        }
    }

    /// Describe a single field; a lookup miss renders nothing
    pub fn describe_field(
        &self,
        schema: &SettingsSchema,
        section_id: &str,
        field_id: &str,
        sink: &ErrorSink,
    ) -> Option<Control> {
        let field = schema.lookup_field(section_id, field_id)?;
        Some(self.describe(schema, field, sink))
    }

    /// Describe every field of one section in declaration order; a
    /// lookup miss renders nothing
    pub fn describe_section(
        &self,
        schema: &SettingsSchema,
        section_id: &str,
        sink: &ErrorSink,
    ) -> Option<Vec<Control>> {
        let section = schema.lookup_section(section_id)?;
        Some(
            section
                .fields
                .values()
                .map(|field| self.describe(schema, field, sink))
                .collect(),
        )
    }

    /// Describe the whole page, section by section, in declaration order
    pub fn describe_all<'a>(
        &self,
        schema: &'a SettingsSchema,
        sink: &ErrorSink,
    ) -> Vec<(&'a str, Vec<Control>)> {
        schema
            .all_sections()
            .map(|(section_id, section)| {
                let controls = section
                    .fields
                    .values()
                    .map(|field| self.describe(schema, field, sink))
                    .collect();
                (section_id, controls)
            })
            .collect()
    }

    fn describe(&self, schema: &SettingsSchema, field: &FieldDefinition, sink: &ErrorSink) -> Control {
        let mut attributes = IndexMap::new();
        let mut options = IndexMap::new();
        let mut markup = None;
        let mut description = field.description.clone();

        match field.kind {
            FieldType::Text | FieldType::Password => {
                attributes.insert("class".to_string(), self.classes("regular-text", field));
                attributes.insert("value".to_string(), field.value.clone());
            }
            FieldType::Select | FieldType::Radio => {
                attributes.insert("value".to_string(), field.value.clone());
                options = field.options.clone();
            }
            FieldType::Checkbox => {
                // truthy current value renders a checked box
                if !field.value.is_empty() && field.value != "0" {
                    attributes.insert("checked".to_string(), "checked".to_string());
                }
            }
            FieldType::Textarea | FieldType::Button => {
                let classes = self.classes("", field);
                if !classes.is_empty() {
                    attributes.insert("class".to_string(), classes);
                }
                attributes.insert("value".to_string(), field.value.clone());
            }
            FieldType::Datepicker | FieldType::Timepicker => {
                let base = format!("settings-{}", field.kind.as_str());
                attributes.insert("class".to_string(), self.classes(&base, field));
                attributes.insert("value".to_string(), field.value.clone());
            }
            FieldType::Image => {
                attributes.insert(
                    "class".to_string(),
                    self.classes("regular-text settings-image", field),
                );
                attributes.insert("value".to_string(), field.value.clone());
                if description.is_none() {
                    description = Some(
                        "Enter an image URL or choose an image from the Media Library"
                            .to_string(),
                    );
                }
            }
            FieldType::Message => {
                // label and description only
            }
            FieldType::Custom => {
                markup = self
                    .custom_renderer
                    .as_ref()
                    .map(|renderer| renderer.render(field));
            }
        }

        Control {
            kind: ControlKind::from(field.kind),
            id: field.id.clone(),
            name: format!("{}[{}]", schema.option_name(), field.id),
            label: field.title.clone(),
            required: field.is_required(),
            attributes,
            options,
            errors: sink.field_messages(&field.id),
            description,
            tooltip: field.tooltip.clone(),
            after_text: field.after_text.clone(),
            markup,
        }
    }

    fn classes(&self, base: &str, field: &FieldDefinition) -> String {
        match (&field.css_class, base.is_empty()) {
            (Some(extra), false) => format!("{base} {extra}"),
            (Some(extra), true) => extra.clone(),
            (None, _) => base.to_string(),
        }
    }
}
