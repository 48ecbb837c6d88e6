//! Per-request error accumulator
//!
//! Validation and rendering happen in separate phases in the host
//! environment, so failed rules are pushed into a sink keyed by field id
//! and the rendering layer reads them back out when annotating controls.
//! One sink lives for one request; there is no process-wide error state.

use indexmap::IndexMap;

/// One failed rule for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the rule that failed
    pub rule: String,
    /// Human-readable message
    pub message: String,
}

/// Ordered, field-keyed collection of validation errors
#[derive(Debug, Clone, Default)]
pub struct ErrorSink {
    entries: IndexMap<String, Vec<FieldError>>,
}

impl ErrorSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed rule for a field
    pub fn push(&mut self, field_id: &str, rule: &str, message: impl Into<String>) {
        self.entries
            .entry(field_id.to_string())
            .or_default()
            .push(FieldError {
                rule: rule.to_string(),
                message: message.into(),
            });
    }

    /// Errors recorded for one field, in the order they were recorded
    pub fn field_errors(&self, field_id: &str) -> &[FieldError] {
        self.entries
            .get(field_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Messages recorded for one field
    pub fn field_messages(&self, field_id: &str) -> Vec<String> {
        self.field_errors(field_id)
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Iterate (field_id, errors) pairs in first-failure order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.entries
            .iter()
            .map(|(id, errors)| (id.as_str(), errors.as_slice()))
    }

    /// Total number of recorded errors across all fields
    pub fn total(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether no errors have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_keeps_field_order_and_per_field_order() {
        let mut sink = ErrorSink::new();
        sink.push("age", "numeric", "This field must be a number.");
        sink.push("name", "required", "This field is required.");
        sink.push("age", "minval", "This field value should be at least 0.");

        assert_eq!(sink.total(), 3);
        let fields: Vec<&str> = sink.iter().map(|(id, _)| id).collect();
        assert_eq!(fields, vec!["age", "name"]);

        let age = sink.field_errors("age");
        assert_eq!(age.len(), 2);
        assert_eq!(age[0].rule, "numeric");
        assert_eq!(age[1].rule, "minval");

        assert!(sink.field_errors("missing").is_empty());
    }
}
