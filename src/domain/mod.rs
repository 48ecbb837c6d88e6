//! Domain layer - schema model and validation engine

pub mod rules;
pub mod schema;
pub mod sink;
pub mod validation;

pub use rules::Rule;
pub use schema::{SectionSelector, SettingsSchema};
pub use sink::{ErrorSink, FieldError};
pub use validation::{ValidationEngine, ValidationOutcome};
