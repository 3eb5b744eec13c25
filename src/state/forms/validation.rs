//! Submit-time validation of the sign-up form
//!
//! Each field carries an ordered list of rules. A field reports only the
//! first rule it breaks; fields are checked in form order.

use super::field::{FieldId, Gender};
use super::signup_form::SignupForm;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// A rule applied to a text value
///
/// Lengths are counted in Unicode scalar values, so an emoji is one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextRule {
    MinChars(usize),
    MaxChars(usize),
    Email,
}

impl TextRule {
    /// Returns the failure message when `value` breaks the rule
    fn check(&self, value: &str) -> Option<String> {
        match *self {
            Self::MinChars(min) if value.chars().count() < min => Some(format!(
                "String must contain at least {min} character(s)"
            )),
            Self::MaxChars(max) if value.chars().count() > max => Some(format!(
                "String must contain at most {max} character(s)"
            )),
            Self::Email if !is_email(value) => Some("Invalid email".to_string()),
            _ => None,
        }
    }
}

const NAME_RULES: &[TextRule] = &[
    TextRule::MinChars(NAME_MIN_CHARS),
    TextRule::MaxChars(NAME_MAX_CHARS),
];
const EMAIL_RULES: &[TextRule] = &[TextRule::Email];
const PASSWORD_RULES: &[TextRule] = &[TextRule::MinChars(PASSWORD_MIN_CHARS)];

fn first_failure(rules: &[TextRule], value: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule.check(value))
}

/// Email address syntax check
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

fn check_gender(value: Option<Gender>) -> Result<Gender, String> {
    let expected = Gender::ALL
        .iter()
        .map(|g| format!("'{}'", g.as_str()))
        .collect::<Vec<_>>()
        .join(" | ");
    value.ok_or_else(|| format!("Invalid enum value. Expected {expected}, received ''"))
}

/// One rejected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Ordered, sparse collection of field failures (at most one per field)
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .failures.len())]
pub struct ValidationErrors {
    failures: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Returns false if the field already has one, in
    /// which case the earlier message is kept.
    pub fn add(&mut self, field: FieldId, message: impl Into<String>) -> bool {
        if self.get(field).is_some() {
            return false;
        }
        self.failures.push(FieldError {
            field,
            message: message.into(),
        });
        true
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.failures
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.failures.iter()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn clear(&mut self) {
        self.failures.clear();
    }
}

/// A snapshot that passed validation
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub password: String,
    pub subscribe: bool,
    pub gender: Gender,
}

impl fmt::Debug for ValidSignup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidSignup")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("subscribe", &self.subscribe)
            .field("gender", &self.gender)
            .finish()
    }
}

/// Check the whole snapshot. Pure; call it again on every submit.
pub fn validate(form: &SignupForm) -> Result<ValidSignup, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let text_checks = [
        (FieldId::Name, NAME_RULES, form.name.as_str()),
        (FieldId::Email, EMAIL_RULES, form.email.as_str()),
        (FieldId::Password, PASSWORD_RULES, form.password.as_str()),
    ];
    for (field, rules, value) in text_checks {
        if let Some(message) = first_failure(rules, value) {
            errors.add(field, message);
        }
    }

    // subscribe is a bool by construction and always passes

    let gender = match check_gender(form.gender) {
        Ok(gender) => Some(gender),
        Err(message) => {
            errors.add(FieldId::Gender, message);
            None
        }
    };

    match gender {
        Some(gender) if errors.is_empty() => Ok(ValidSignup {
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            subscribe: form.subscribe,
            gender,
        }),
        _ => Err(errors),
    }
}
