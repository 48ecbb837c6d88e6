//! Settings Forms
//!
//! Declarative, schema-driven engine for defining, validating, and
//! describing structured settings forms. A caller supplies a passive
//! definition tree of pages, sections, and typed fields; the engine
//! turns it into control descriptions, enforces a rule-based validation
//! pipeline over submitted values, and reports per-field errors back.
//!
//! Execution is synchronous and request-scoped: build a
//! [`SettingsSchema`] and a [`ValidationEngine`] per request, run a
//! pass, read the [`ErrorSink`], and discard all three.

// Public exports
pub mod contract;
pub use contract::{
    FieldDefinition, FieldType, MemoryStore, SectionDefinition, SettingsError, SettingsStore,
};

pub mod config;
pub use config::EngineConfig;

pub mod domain;
pub use domain::{
    ErrorSink, FieldError, Rule, SectionSelector, SettingsSchema, ValidationEngine,
    ValidationOutcome,
};

pub mod input;
pub use input::SchemaInput;

pub mod render;
pub use render::{Control, ControlKind, CustomFieldRenderer, RenderAdapter};
