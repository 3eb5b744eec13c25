//! The sign-up form snapshot and its update operations

use super::field::{FieldId, Gender, TextField};

/// A single-field change. Applying one replaces exactly that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Password(String),
    Subscribe(bool),
    Gender(Gender),
}

impl FieldUpdate {
    /// The field this update targets
    pub fn field(&self) -> FieldId {
        match self {
            Self::Name(_) => FieldId::Name,
            Self::Email(_) => FieldId::Email,
            Self::Password(_) => FieldId::Password,
            Self::Subscribe(_) => FieldId::Subscribe,
            Self::Gender(_) => FieldId::Gender,
        }
    }
}

/// Current values of every form field.
///
/// May hold invalid values while the user is typing; validity is only
/// checked when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub subscribe: bool,
    /// `None` until the user picks an option
    pub gender: Option<Gender>,
}

impl SignupForm {
    /// Apply a single-field update. This is the only path that mutates the snapshot.
    pub fn apply(&mut self, update: FieldUpdate) {
        tracing::trace!(field = %update.field(), "field updated");
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::Email(value) => self.email = value,
            FieldUpdate::Password(value) => self.password = value,
            FieldUpdate::Subscribe(value) => self.subscribe = value,
            FieldUpdate::Gender(value) => self.gender = Some(value),
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        let update = match field {
            TextField::Name => FieldUpdate::Name(value),
            TextField::Email => FieldUpdate::Email(value),
            TextField::Password => FieldUpdate::Password(value),
        };
        self.apply(update);
    }

    pub fn set_subscribe(&mut self, value: bool) {
        self.apply(FieldUpdate::Subscribe(value));
    }

    pub fn select_gender(&mut self, value: Gender) {
        self.apply(FieldUpdate::Gender(value));
    }

    /// Current value of a text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Email => &self.email,
            TextField::Password => &self.password,
        }
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: TextField, c: char) {
        let mut value = self.text(field).to_string();
        value.push(c);
        self.set_text(field, value);
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: TextField) {
        let mut value = self.text(field).to_string();
        if value.pop().is_some() {
            self.set_text(field, value);
        }
    }

    pub fn toggle_subscribe(&mut self) {
        self.set_subscribe(!self.subscribe);
    }

    /// Restore the empty defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> SignupForm {
        SignupForm {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
            password: "secret1".to_string(),
            subscribe: true,
            gender: Some(Gender::Male),
        }
    }

    #[test]
    fn test_default_has_empty_values() {
        let form = SignupForm::default();
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.password, "");
        assert!(!form.subscribe);
        assert!(form.gender.is_none());
    }

    #[test]
    fn test_apply_replaces_only_target_field() {
        let mut form = filled_form();
        form.apply(FieldUpdate::Email("new@example.com".to_string()));

        let expected = SignupForm {
            email: "new@example.com".to_string(),
            ..filled_form()
        };
        assert_eq!(form, expected);
    }

    #[test]
    fn test_each_update_targets_its_field() {
        assert_eq!(FieldUpdate::Name(String::new()).field(), FieldId::Name);
        assert_eq!(FieldUpdate::Password(String::new()).field(), FieldId::Password);
        assert_eq!(FieldUpdate::Subscribe(true).field(), FieldId::Subscribe);
        assert_eq!(FieldUpdate::Gender(Gender::Female).field(), FieldId::Gender);
    }

    #[test]
    fn test_set_text_accepts_invalid_intermediate_value() {
        let mut form = SignupForm::default();
        form.set_text(TextField::Name, "A".to_string());
        assert_eq!(form.name, "A");
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut form = SignupForm::default();
        form.push_char(TextField::Password, 'a');
        form.push_char(TextField::Password, 'b');
        assert_eq!(form.text(TextField::Password), "ab");

        form.pop_char(TextField::Password);
        assert_eq!(form.text(TextField::Password), "a");
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut form = SignupForm::default();
        form.pop_char(TextField::Name);
        assert_eq!(form, SignupForm::default());
    }

    #[test]
    fn test_toggle_subscribe() {
        let mut form = SignupForm::default();
        form.toggle_subscribe();
        assert!(form.subscribe);
        form.toggle_subscribe();
        assert!(!form.subscribe);
    }

    #[test]
    fn test_select_gender_replaces_previous_choice() {
        let mut form = SignupForm::default();
        form.select_gender(Gender::Male);
        form.select_gender(Gender::Female);
        assert_eq!(form.gender, Some(Gender::Female));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, SignupForm::default());
    }
}
