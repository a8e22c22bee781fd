//! Form validation for user-submitted data.
//!
//! Each submission type declares its field rules as data and runs them
//! through the shared [`validate`] function. Failures accumulate per field
//! into [`FormErrors`], which renders as a 422 JSON body; validation always
//! runs before any persistence.

pub mod comment;
pub mod login;
pub mod profile;
pub mod signup;

use std::collections::BTreeMap;

use thiserror::Error;

/// Rejected form fields mapped to their messages.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("rejected form fields: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// A single field rule.
#[derive(Debug, Clone, Copy)]
pub enum Constraint<'a> {
    /// Value must be present and not blank.
    Required,
    /// Character count must fall within the inclusive range.
    Length { min: usize, max: usize },
    /// Value must be shaped like an email address.
    Email,
    /// Value must equal another field's value.
    Matches {
        other: &'static str,
        value: &'a str,
    },
}

impl Constraint<'_> {
    fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::Required => value
                .trim()
                .is_empty()
                .then(|| "This field is required.".to_string()),
            Self::Length { min, max } => {
                let count = value.chars().count();

                (count < *min || count > *max).then(|| {
                    format!("Field must be between {min} and {max} characters long.")
                })
            }
            Self::Email => {
                (!looks_like_email(value)).then(|| "Invalid email address.".to_string())
            }
            Self::Matches { other, value: expected } => {
                (value != *expected).then(|| format!("Field must be equal to {other}."))
            }
        }
    }
}

/// A field's submitted value paired with its rules.
pub struct FieldSpec<'a> {
    pub field: &'static str,
    pub value: &'a str,
    pub constraints: &'a [Constraint<'a>],
}

/// Checks every field and accumulates failures.
///
/// The first failing rule settles a field (a blank required field is not
/// also reported as too short); failures on different fields all appear in
/// the result.
pub fn validate(fields: &[FieldSpec]) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    for spec in fields {
        for constraint in spec.constraints {
            if let Some(message) = constraint.check(spec.value) {
                errors.push(spec.field, message);
                break;
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Shape check only: one `@`, a non-empty local part, and a dotted domain.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}
