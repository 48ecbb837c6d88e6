//! Rule-based validation engine
//!
//! The engine interprets a field's ordered rule specifiers against one
//! candidate value, accumulating a message per failed rule. Evaluation
//! never short-circuits across rules: every rule in the sequence is
//! checked so a full set of messages is collected in one pass.
//!
//! Skip policy: a rule neither passes nor fails when the candidate value
//! is empty and the rule is not `required`. Optional fields therefore
//! skip format checks when left blank, while `required` still catches
//! emptiness. Unrecognized rules are exempt from the skip and always
//! fail, so a typo in a rule string is visible no matter the input.

use std::collections::HashMap;

use chrono::Utc;
use indexmap::IndexMap;
use regex::Regex;
use url::Url;

use crate::config::EngineConfig;
use crate::contract::FieldDefinition;

use super::rules::{self, Rule};
use super::schema::SettingsSchema;
use super::sink::ErrorSink;

/// Predicate registered for the `custom` rule; returning true marks the
/// value INVALID (the inverted contract is preserved from the original
/// rule set)
pub type CustomPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct CustomRule {
    predicate: CustomPredicate,
    message: String,
}

/// Result of one `validate_all` pass
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// True iff every field's validation succeeded
    pub valid: bool,
    /// Cleaned field_id -> value map: accepted values for passing fields,
    /// plus prior values for failing fields when revert-on-invalid is on
    pub accepted: IndexMap<String, String>,
}

impl ValidationOutcome {
    /// Whether the whole pass succeeded
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Interprets rule sequences and accumulates error messages
///
/// Expected usage is one engine instance per validation pass; the flat
/// message list does not reset between calls.
pub struct ValidationEngine {
    config: EngineConfig,
    errors: Vec<String>,
    custom: Option<CustomRule>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with explicit configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            errors: Vec::new(),
            custom: None,
        }
    }

    /// Register the predicate and message used by the `custom` rule;
    /// last registration wins
    pub fn set_custom_validation(
        &mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) {
        self.custom = Some(CustomRule {
            predicate: Box::new(predicate),
            message: message.into(),
        });
    }

    /// Flat ordered list of messages accumulated since construction
    pub fn get_errors(&self) -> &[String] {
        &self.errors
    }

    /// Apply every rule in order against one field's candidate value
    ///
    /// Returns true iff no rule failed. The `striphtml` and `website`
    /// rules write the sanitized/prefixed value back into `value`.
    pub fn validate(
        &mut self,
        value: &mut String,
        rule_tokens: &[String],
        field: &FieldDefinition,
        sink: &mut ErrorSink,
    ) -> bool {
        let mut valid = true;

        for token in rule_tokens {
            let rule = Rule::parse(token);

            if let Rule::Unknown(_) = rule {
                self.fail(sink, &field.id, &rule, rule.failure_message());
                valid = false;
                continue;
            }

            if value.is_empty() && rule != Rule::Required {
                continue;
            }

            let failure: Option<String> = match &rule {
                Rule::Required => value
                    .trim()
                    .is_empty()
                    .then(|| rule.failure_message()),
                Rule::Numeric => (!rules::is_numeric(value)).then(|| rule.failure_message()),
                Rule::Positive => {
                    (rules::parse_number(value) < 0.0).then(|| rule.failure_message())
                }
                Rule::Int => (!value.chars().all(|c| c.is_ascii_digit()))
                    .then(|| rule.failure_message()),
                Rule::Email => (!rules::is_valid_email(value)).then(|| rule.failure_message()),
                Rule::Alphanumeric => {
                    let comp: String = value.chars().filter(|c| *c != '_').collect();
                    (!comp.is_empty() && !comp.chars().all(|c| c.is_ascii_alphanumeric()))
                        .then(|| rule.failure_message())
                }
                // same character class as `alphanumeric`, preserved as-is
                Rule::Alpha => {
                    let comp: String = value.chars().filter(|c| *c != ' ').collect();
                    (!comp.is_empty() && !comp.chars().all(|c| c.is_ascii_alphanumeric()))
                        .then(|| rule.failure_message())
                }
                Rule::Name => {
                    let comp: String = value
                        .chars()
                        .filter(|c| !matches!(c, ' ' | '-' | '\''))
                        .collect();
                    (!comp.is_empty() && !comp.chars().all(|c| c.is_ascii_alphanumeric()))
                        .then(|| rule.failure_message())
                }
                Rule::MaxLen(n) => (value.len() > *n).then(|| rule.failure_message()),
                // only reached for non-empty values; `minlen` alone never
                // rejects blank input
                Rule::MinLen(n) => (value.len() < *n).then(|| rule.failure_message()),
                Rule::MaxVal(n) => {
                    (rules::parse_number(value) > *n).then(|| rule.failure_message())
                }
                Rule::MinVal(n) => {
                    (rules::parse_number(value) < *n).then(|| rule.failure_message())
                }
                Rule::Regex(pattern) => {
                    let matched = Regex::new(pattern)
                        .map(|re| re.is_match(value))
                        .unwrap_or(false);
                    (!matched).then(|| {
                        field
                            .custom_error
                            .clone()
                            .unwrap_or_else(|| rule.failure_message())
                    })
                }
                // unparseable values pass; the `date` rule owns parseability
                Rule::Past => rules::parse_datetime(value)
                    .filter(|dt| *dt >= Utc::now())
                    .map(|_| rule.failure_message()),
                Rule::Website => {
                    if !value.contains("://") {
                        *value = format!("{}://{}", self.config.default_url_scheme, value);
                    }
                    Url::parse(value).is_err().then(|| rule.failure_message())
                }
                Rule::Date => rules::parse_datetime(value)
                    .is_none()
                    .then(|| rule.failure_message()),
                Rule::Password(n) => (value.trim().len() > *n).then(|| rule.failure_message()),
                Rule::Custom => self
                    .custom
                    .as_ref()
                    .filter(|c| (c.predicate)(value))
                    .map(|c| c.message.clone()),
                Rule::StripHtml => {
                    *value = rules::strip_markup(value);
                    None
                }
                Rule::Unknown(_) => None, // handled above
            };

            if let Some(message) = failure {
                self.fail(sink, &field.id, &rule, message);
                valid = false;
            }
        }

        valid
    }

    /// Walk every section and field of the schema in declaration order,
    /// validating each field's submitted value
    ///
    /// Missing keys in `submitted` default to the empty string. Every
    /// field is visited regardless of earlier failures so the complete
    /// set of cross-field errors is collected in one pass.
    pub fn validate_all(
        &mut self,
        schema: &SettingsSchema,
        submitted: &HashMap<String, String>,
        sink: &mut ErrorSink,
    ) -> ValidationOutcome {
        tracing::debug!(page = schema.page(), "validating submitted settings");

        let mut valid = true;
        let mut accepted = IndexMap::new();

        for (_, section) in schema.all_sections() {
            for (field_id, field) in &section.fields {
                let mut value = submitted.get(field_id).cloned().unwrap_or_default();

                let field_valid = self.validate(&mut value, &field.validation, field, sink);
                tracing::trace!(field = %field_id, valid = field_valid, "field validated");

                if field_valid {
                    accepted.insert(field_id.clone(), value);
                } else {
                    valid = false;
                    if self.config.revert_on_invalid {
                        accepted.insert(field_id.clone(), field.value.clone());
                    }
                }
            }
        }

        tracing::debug!(valid, errors = sink.total(), "validation pass complete");
        ValidationOutcome { valid, accepted }
    }

    fn fail(&mut self, sink: &mut ErrorSink, field_id: &str, rule: &Rule, message: String) {
        tracing::trace!(field = field_id, rule = rule.name(), %message, "rule failed");
        self.errors.push(message.clone());
        sink.push(field_id, rule.name(), message);
    }
}
