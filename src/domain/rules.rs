//! Validation rule specifiers
//!
//! A field's validation attribute is an ordered sequence of space-delimited
//! specifiers, each a bare rule name or `name:parameter`. Parsing never
//! fails: unrecognized names become `Rule::Unknown` and are reported as a
//! per-field error at validation time, and a non-numeric parameter where a
//! numeric one is required reads as 0.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a compile-time constant
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").unwrap()
});

/// One parsed rule specifier
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Trimmed value must not be empty
    Required,
    /// Value must be a numeric literal
    Numeric,
    /// Numeric value must not be negative
    Positive,
    /// Value must contain only digits
    Int,
    /// Value must be an email address
    Email,
    /// Value (underscores removed) must be alphanumeric
    Alphanumeric,
    /// Value (spaces removed) must be alphanumeric; matches `Alphanumeric`
    /// and so accepts digits, preserved as-is
    Alpha,
    /// Value (spaces, dashes, apostrophes removed) must be alphanumeric
    Name,
    /// Value length must not exceed the parameter
    MaxLen(usize),
    /// Non-empty value length must reach the parameter
    MinLen(usize),
    /// Numeric value must not exceed the parameter
    MaxVal(f64),
    /// Numeric value must reach the parameter
    MinVal(f64),
    /// Value must match the pattern
    Regex(String),
    /// Value must parse as a date strictly earlier than now
    Past,
    /// Value must be a valid URL after default-scheme prefixing
    Website,
    /// Value must parse as a date
    Date,
    /// Trimmed value length must not exceed the parameter; mirrors
    /// `MaxLen` despite the name, preserved as-is
    Password(usize),
    /// Defer to the registered custom predicate; the predicate returning
    /// true marks the value invalid, preserved as-is
    Custom,
    /// Not a check: strips markup from the value and always passes
    StripHtml,
    /// Unrecognized specifier; always fails
    Unknown(String),
}

impl Rule {
    /// Parse a single space-delimited specifier token
    pub fn parse(token: &str) -> Self {
        let (name, param) = match token.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (token, None),
        };

        let int_param = || param.and_then(|p| p.parse::<usize>().ok()).unwrap_or(0);
        let num_param = || param.and_then(|p| p.parse::<f64>().ok()).unwrap_or(0.0);

        match name {
            "required" => Self::Required,
            "numeric" => Self::Numeric,
            "positive" => Self::Positive,
            "int" => Self::Int,
            "email" => Self::Email,
            "alphanumeric" => Self::Alphanumeric,
            "alpha" => Self::Alpha,
            "name" => Self::Name,
            "maxlen" => Self::MaxLen(int_param()),
            "minlen" => Self::MinLen(int_param()),
            "maxval" => Self::MaxVal(num_param()),
            "minval" => Self::MinVal(num_param()),
            "regex" => Self::Regex(param.unwrap_or_default().to_string()),
            "past" => Self::Past,
            "website" => Self::Website,
            "date" => Self::Date,
            "password" => Self::Password(int_param()),
            "custom" => Self::Custom,
            "striphtml" => Self::StripHtml,
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Rule name used for keying error-sink entries
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Numeric => "numeric",
            Self::Positive => "positive",
            Self::Int => "int",
            Self::Email => "email",
            Self::Alphanumeric => "alphanumeric",
            Self::Alpha => "alpha",
            Self::Name => "name",
            Self::MaxLen(_) => "maxlen",
            Self::MinLen(_) => "minlen",
            Self::MaxVal(_) => "maxval",
            Self::MinVal(_) => "minval",
            Self::Regex(_) => "regex",
            Self::Past => "past",
            Self::Website => "website",
            Self::Date => "date",
            Self::Password(_) => "password",
            Self::Custom => "custom",
            Self::StripHtml => "striphtml",
            Self::Unknown(_) => "unknown",
        }
    }

    /// Human-readable failure message for this rule
    ///
    /// `Custom` messages come from the registered predicate and the
    /// `regex` rule may be overridden by a field-level message; both are
    /// resolved by the engine, so the defaults here cover the rest.
    pub fn failure_message(&self) -> String {
        match self {
            Self::Required => "This field is required.".to_string(),
            Self::Numeric => "This field must be a number.".to_string(),
            Self::Positive => "This field must be positive.".to_string(),
            Self::Int => "This field must be an integer value.".to_string(),
            Self::Email => "This field must be an email address.".to_string(),
            Self::Alphanumeric => {
                "This field only accepts alphanumeric characters.".to_string()
            }
            Self::Alpha => "This field only accepts alpha letters.".to_string(),
            Self::Name => {
                "This field only accepts alpha letters, spaces, dashes (-), and apostrophes (')."
                    .to_string()
            }
            Self::MaxLen(n) => {
                format!("This field is too long, should be no more than {n} characters.")
            }
            Self::MinLen(n) => {
                format!("This field is too short, should be at least {n} characters.")
            }
            Self::MaxVal(n) => format!("This field value should be no more than {n}."),
            Self::MinVal(n) => format!("This field value should be at least {n}."),
            Self::Regex(pattern) => format!("Failed regular expression {pattern}"),
            Self::Past => "Please enter a date in the past.".to_string(),
            Self::Website => "This field must be a valid website.".to_string(),
            Self::Date => "This field must be a valid date.".to_string(),
            Self::Password(n) => format!("The password should be at least {n} characters."),
            Self::Custom => "This field failed custom validation.".to_string(),
            Self::StripHtml => String::new(),
            Self::Unknown(token) => format!("Unrecognized validation rule: \"{token}\""),
        }
    }
}

/// Whether the value is a numeric literal
pub(crate) fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Numeric reading of a value; unparseable values read as 0
pub(crate) fn parse_number(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Email syntax check
pub(crate) fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Best-effort date/time parse over the representations the engine accepts
pub(crate) fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            let ndt = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }

    None
}

/// Remove markup tags from a value, keeping the text between them
pub(crate) fn strip_markup(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for ch in value.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_parameterized_specifiers() {
        assert_eq!(Rule::parse("required"), Rule::Required);
        assert_eq!(Rule::parse("maxlen:10"), Rule::MaxLen(10));
        assert_eq!(Rule::parse("minval:1.5"), Rule::MinVal(1.5));
        assert_eq!(
            Rule::parse("regex:^[a-z]+$"),
            Rule::Regex("^[a-z]+$".to_string())
        );
    }

    #[test]
    fn non_numeric_parameter_reads_as_zero() {
        assert_eq!(Rule::parse("maxlen:lots"), Rule::MaxLen(0));
        assert_eq!(Rule::parse("maxval:"), Rule::MaxVal(0.0));
        assert_eq!(Rule::parse("password:x"), Rule::Password(0));
    }

    #[test]
    fn unrecognized_specifier_reports_the_rule_name() {
        let rule = Rule::parse("frobnicate");
        assert_eq!(rule, Rule::Unknown("frobnicate".to_string()));
        assert_eq!(
            rule.failure_message(),
            "Unrecognized validation rule: \"frobnicate\""
        );

        // parameterized unknown rules report the name without the parameter
        assert_eq!(
            Rule::parse("frobnicate:7"),
            Rule::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn numeric_checks() {
        assert!(is_numeric("42"));
        assert!(is_numeric("-5"));
        assert!(is_numeric("3.14"));
        assert!(is_numeric(" 10 "));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("abc"));
        assert_eq!(parse_number("-5"), -5.0);
        assert_eq!(parse_number("oops"), 0.0);
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn date_parsing_accepts_common_representations() {
        assert!(parse_datetime("2020-06-15").is_some());
        assert!(parse_datetime("2020-06-15 10:30:00").is_some());
        assert!(parse_datetime("2020-06-15T10:30:00Z").is_some());
        assert!(parse_datetime("06/15/2020").is_some());
        assert!(parse_datetime("15 June 2020").is_some());
        assert!(parse_datetime("not a date").is_none());
    }

    #[test]
    fn markup_stripping_keeps_text() {
        assert_eq!(strip_markup("<b>hello</b> world"), "hello world");
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("<script>x</script>"), "x");
        assert_eq!(strip_markup("a < b"), "a ");
    }
}
