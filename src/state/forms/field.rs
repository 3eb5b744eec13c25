//! Form field identities and value objects

use serde::Serialize;
use std::fmt;

/// Identity of every field on the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Password,
    Subscribe,
    Gender,
}

impl FieldId {
    /// Machine key used in traces and error output
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Subscribe => "subscribe",
            Self::Gender => "gender",
        }
    }

    /// Human label rendered next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email address",
            Self::Password => "Password",
            Self::Subscribe => "Subscribe to newsletter",
            Self::Gender => "Gender",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The fields that hold free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Password,
}

impl TextField {
    pub fn field_id(self) -> FieldId {
        match self {
            Self::Name => FieldId::Name,
            Self::Email => FieldId::Email,
            Self::Password => FieldId::Password,
        }
    }
}

/// Choices offered by the gender radio group
///
/// There is no default: the form holds `None` until the user picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Options in the order they are rendered
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> Self {
        // Two options, so stepping back is the same as stepping forward
        self.next()
    }
}

/// What currently holds keyboard focus: a field or the submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldId::Name)
    }
}

impl Focus {
    /// Tab order of the form
    pub const ORDER: [Focus; 6] = [
        Focus::Field(FieldId::Name),
        Focus::Field(FieldId::Email),
        Focus::Field(FieldId::Password),
        Focus::Field(FieldId::Subscribe),
        Focus::Field(FieldId::Gender),
        Focus::Submit,
    ];

    fn position(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[pos - 1]
        }
    }

    /// The text field under focus, if any
    pub fn text_field(&self) -> Option<TextField> {
        match self {
            Focus::Field(FieldId::Name) => Some(TextField::Name),
            Focus::Field(FieldId::Email) => Some(TextField::Email),
            Focus::Field(FieldId::Password) => Some(TextField::Password),
            _ => None,
        }
    }

    pub fn is_field(&self, field: FieldId) -> bool {
        *self == Focus::Field(field)
    }
}
