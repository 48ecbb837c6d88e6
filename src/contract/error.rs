//! Contract error types for the form engine
//!
//! Only schema-structure problems are errors. Missing sections or fields
//! during render and validate are `Option`-shaped lookup misses, and
//! failing validation is a routine outcome reported through the error
//! sink, never through this type.

/// Form engine errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    /// Malformed schema input, fatal at build time
    #[error("malformed schema: {0}")]
    Schema(String),

    /// A field value that is not a scalar (string, number, bool, null)
    #[error("field '{field_id}' has a non-scalar value")]
    Value {
        /// Field the offending value belongs to
        field_id: String,
    },
}
