//! Settings schema model
//!
//! A schema is built once per form-building request from caller input and
//! discarded when the request completes. Its shape is immutable after
//! construction; only field values change during a render/validate cycle.

use indexmap::IndexMap;

use crate::contract::{FieldDefinition, SectionDefinition, SettingsError, SettingsStore};
use crate::input::{mapper, SchemaInput};

/// Which sections a listing operation should cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionSelector {
    /// Every section of the page, in declaration order
    All,
    /// A single named section
    One(String),
    /// An explicit ordered list of sections
    Many(Vec<String>),
}

/// The page -> sections -> fields definition tree
#[derive(Debug, Clone)]
pub struct SettingsSchema {
    page: String,
    group: String,
    option_name: String,
    sections: IndexMap<String, SectionDefinition>,
}

impl SettingsSchema {
    /// Construct the schema from a caller-supplied definition tree
    ///
    /// Section and field identifiers are assigned from their map keys.
    pub fn build(input: SchemaInput) -> Result<Self, SettingsError> {
        let mut sections = IndexMap::with_capacity(input.sections.len());
        for (section_id, section_input) in input.sections {
            let section = mapper::build_section(&section_id, section_input)?;
            sections.insert(section_id, section);
        }

        tracing::debug!(
            page = %input.page,
            sections = sections.len(),
            "settings schema built"
        );

        Ok(Self {
            page: input.page,
            group: input.group,
            option_name: input.option_name,
            sections,
        })
    }

    /// Construct the schema from a raw JSON definition tree
    pub fn from_value(value: serde_json::Value) -> Result<Self, SettingsError> {
        let input: SchemaInput = serde_json::from_value(value)
            .map_err(|e| SettingsError::Schema(e.to_string()))?;
        Self::build(input)
    }

    /// Page the form is rendered on
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Settings group name
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Persistence key namespace
    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    /// Find a section by id; `None` is a tolerated lookup miss
    pub fn lookup_section(&self, section_id: &str) -> Option<&SectionDefinition> {
        self.sections.get(section_id)
    }

    /// Find a field by (section_id, field_id); `None` is a tolerated
    /// lookup miss since schema and submitted data may drift apart
    /// between render and submit
    pub fn lookup_field(&self, section_id: &str, field_id: &str) -> Option<&FieldDefinition> {
        self.sections.get(section_id)?.fields.get(field_id)
    }

    /// All sections in declaration order; this is both the rendering
    /// order and the validation traversal order
    pub fn all_sections(&self) -> impl Iterator<Item = (&str, &SectionDefinition)> {
        self.sections.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// Sections matching a selector, preserving the selector's order;
    /// unknown ids are skipped silently
    pub fn select_sections(&self, selector: &SectionSelector) -> Vec<&SectionDefinition> {
        match selector {
            SectionSelector::All => self.sections.values().collect(),
            SectionSelector::One(id) => self.lookup_section(id).into_iter().collect(),
            SectionSelector::Many(ids) => {
                ids.iter().filter_map(|id| self.lookup_section(id)).collect()
            }
        }
    }

    /// Pull persisted values into the schema's field value slots,
    /// typically before a render cycle
    pub fn load_current_values(&mut self, store: &dyn SettingsStore) -> anyhow::Result<()> {
        for section in self.sections.values_mut() {
            for (field_id, field) in section.fields.iter_mut() {
                if let Some(value) = store.read_current_value(field_id)? {
                    field.value = value;
                }
            }
        }
        Ok(())
    }
}
