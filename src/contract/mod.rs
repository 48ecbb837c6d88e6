//! Contract layer - public data model for the form engine
//!
//! This layer contains transport-agnostic models and the persistence seam.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;
pub mod store;

pub use error::SettingsError;
pub use model::{FieldDefinition, FieldType, SectionDefinition};
pub use store::{MemoryStore, SettingsStore};
