/**
 * Declarative Field Validation
 *
 * Rule sets are plain data: a slice of `FieldRule`s, each naming a field,
 * a constraint and the message reported when the constraint fails. The
 * `validate` function walks a rule set against any type implementing
 * `Fields` and collects every violation.
 *
 * # Evaluation Order
 *
 * Rules are checked in slice order. Once a field has failed one rule, its
 * remaining rules are skipped, so each field reports at most one error.
 * Fields that are absent only fail `Rule::Required`; every other rule treats
 * an absent field as satisfied.
 */
use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::{FieldError, ValidationErrors};

/// Basic email shape: ASCII letters, digits and `_` with optional `.`/`-`
/// separators, an `@`, and a domain ending in a 2-3 character label.
///
/// `\w` in the `regex` crate is Unicode-aware, so the classes are spelled out.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$")
        .expect("email pattern is a valid regex")
});

/// A single constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Field must be present and, for text, non-empty
    Required,
    /// Text must have at least this many characters
    MinLength(usize),
    /// Text must have at most this many characters
    MaxLength(usize),
    /// Text must look like an email address
    Email,
    /// Text must be one of the listed values
    OneOf(&'static [&'static str]),
    /// Number must be zero or greater
    NonNegative,
}

/// A constraint bound to a field, with the message reported on failure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, rule: Rule, message: &'static str) -> Self {
        Self {
            field,
            rule,
            message,
        }
    }
}

/// The value of one field as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Text)
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Number)
    }
}

/// Exposes named fields to the validator
pub trait Fields {
    /// Look up a field by name; unknown names are `Missing`
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// Check `input` against `rules`, collecting one error per failing field
pub fn validate<T: Fields + ?Sized>(input: &T, rules: &[FieldRule]) -> Result<(), ValidationErrors> {
    let mut errors: Vec<FieldError> = Vec::new();

    for rule in rules {
        if errors.iter().any(|e| e.field == rule.field) {
            continue;
        }
        if !satisfies(rule.rule, input.field(rule.field)) {
            errors.push(FieldError::new(rule.field, rule.message));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

/// True when `value` passes the email shape check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn satisfies(rule: Rule, value: FieldValue<'_>) -> bool {
    match (rule, value) {
        (Rule::Required, FieldValue::Missing) => false,
        (Rule::Required, FieldValue::Text(text)) => !text.is_empty(),
        (Rule::Required, _) => true,
        (_, FieldValue::Missing) => true,
        (Rule::MinLength(min), FieldValue::Text(text)) => text.chars().count() >= min,
        (Rule::MaxLength(max), FieldValue::Text(text)) => text.chars().count() <= max,
        (Rule::Email, FieldValue::Text(text)) => is_valid_email(text),
        (Rule::OneOf(allowed), FieldValue::Text(text)) => allowed.contains(&text),
        (Rule::NonNegative, FieldValue::Number(n)) => n >= 0.0,
        // a rule applied to the wrong kind of value never passes
        _ => false,
    }
}
