//! Application state definitions

use super::forms::{
    validate, FieldId, Focus, Gender, SignupForm, TextField, ValidSignup, ValidationErrors,
};
use crate::submit::SubmissionReceipt;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current field values
    pub form: SignupForm,
    /// Errors from the latest submit attempt
    pub field_errors: ValidationErrors,
    /// Keyboard focus
    pub focus: Focus,
    /// Highlighted option while the gender group is focused
    pub gender_cursor: Gender,
    /// Receipt of the most recent successful submission
    pub last_receipt: Option<SubmissionReceipt>,
    /// Number of successful submissions this session
    pub submission_count: u32,
    /// Errors waiting to be shown in the modal dialog
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SignupForm::default(),
            field_errors: ValidationErrors::default(),
            focus: Focus::default(),
            gender_cursor: Gender::ALL[0],
            last_receipt: None,
            submission_count: 0,
            error_queue: VecDeque::new(),
        }
    }
}

impl AppState {
    pub fn next_field(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focus.prev());
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        // Start the radio cursor on the chosen option
        if focus.is_field(FieldId::Gender) {
            if let Some(gender) = self.form.gender {
                self.gender_cursor = gender;
            }
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focus.text_field() {
            self.form.push_char(field, c);
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.text_field() {
            self.form.pop_char(field);
        }
    }

    /// Space/Enter on a checkbox or radio group
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Field(FieldId::Subscribe) => self.form.toggle_subscribe(),
            Focus::Field(FieldId::Gender) => self.form.select_gender(self.gender_cursor),
            _ => {}
        }
    }

    /// Move the radio cursor and select the option under it
    pub fn cycle_gender(&mut self, forward: bool) {
        if !self.focus.is_field(FieldId::Gender) {
            return;
        }
        self.gender_cursor = if forward {
            self.gender_cursor.next()
        } else {
            self.gender_cursor.prev()
        };
        self.form.select_gender(self.gender_cursor);
    }

    /// Whether the focused input takes free text
    pub fn is_text_focused(&self) -> bool {
        self.focus.text_field().is_some()
    }

    /// Current value of a text field
    pub fn text(&self, field: TextField) -> &str {
        self.form.text(field)
    }

    /// Validate the current snapshot.
    ///
    /// Previous errors are always dropped first; on failure they are replaced
    /// by the new set.
    pub fn validate_form(&mut self) -> Option<ValidSignup> {
        self.field_errors.clear();
        match validate(&self.form) {
            Ok(signup) => Some(signup),
            Err(errors) => {
                self.field_errors = errors;
                None
            }
        }
    }

    /// Record a successful submission
    pub fn record_submission(&mut self, receipt: SubmissionReceipt) {
        self.submission_count += 1;
        self.last_receipt = Some(receipt);
    }

    /// Clear values, errors and focus
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.field_errors.clear();
        self.focus = Focus::default();
        self.gender_cursor = Gender::ALL[0];
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus_on(state: &mut AppState, field: FieldId) {
        while !state.focus.is_field(field) {
            state.next_field();
        }
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::Field(FieldId::Name));
        assert!(state.field_errors.is_empty());
        assert!(!state.has_errors());
        assert_eq!(state.submission_count, 0);
        assert!(state.form.gender.is_none());
        assert_eq!(state.gender_cursor, Gender::Male);
    }

    #[test]
    fn test_input_goes_to_focused_text_field() {
        let mut state = AppState::default();
        state.input_char('A');
        state.next_field();
        state.input_char('b');
        assert_eq!(state.text(TextField::Name), "A");
        assert_eq!(state.text(TextField::Email), "b");
    }

    #[test]
    fn test_input_ignored_on_non_text_focus() {
        let mut state = AppState::default();
        focus_on(&mut state, FieldId::Subscribe);
        state.input_char('x');
        state.backspace();
        assert_eq!(state.form, SignupForm::default());
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut state = AppState::default();
        state.input_char('A');
        state.input_char('l');
        state.backspace();
        assert_eq!(state.text(TextField::Name), "A");
    }

    #[test]
    fn test_activate_toggles_subscribe() {
        let mut state = AppState::default();
        focus_on(&mut state, FieldId::Subscribe);
        state.activate();
        assert!(state.form.subscribe);
        state.activate();
        assert!(!state.form.subscribe);
    }

    #[test]
    fn test_activate_selects_highlighted_gender() {
        let mut state = AppState::default();
        focus_on(&mut state, FieldId::Gender);
        assert!(state.form.gender.is_none());
        state.activate();
        assert_eq!(state.form.gender, Some(Gender::Male));
    }

    #[test]
    fn test_cycle_gender_selects_option() {
        let mut state = AppState::default();
        focus_on(&mut state, FieldId::Gender);
        state.cycle_gender(true);
        assert_eq!(state.form.gender, Some(Gender::Female));
        state.cycle_gender(false);
        assert_eq!(state.form.gender, Some(Gender::Male));
    }

    #[test]
    fn test_cycle_gender_ignored_off_group() {
        let mut state = AppState::default();
        state.cycle_gender(true);
        assert!(state.form.gender.is_none());
    }

    #[test]
    fn test_focusing_gender_starts_cursor_on_selection() {
        let mut state = AppState::default();
        state.form.select_gender(Gender::Female);
        focus_on(&mut state, FieldId::Gender);
        assert_eq!(state.gender_cursor, Gender::Female);
    }

    #[test]
    fn test_validate_form_populates_errors() {
        let mut state = AppState::default();
        assert!(state.validate_form().is_none());
        assert_eq!(state.field_errors.len(), 4);
    }

    #[test]
    fn test_validate_form_replaces_previous_errors() {
        let mut state = AppState::default();
        state.validate_form();

        state.form.name = "Al".to_string();
        state.form.email = "al@example.com".to_string();
        state.form.password = "secret1".to_string();
        state.validate_form();

        assert_eq!(state.field_errors.len(), 1);
        assert!(state.field_errors.get(FieldId::Gender).is_some());
        assert!(state.field_errors.get(FieldId::Name).is_none());
    }

    #[test]
    fn test_validate_form_success_clears_errors() {
        let mut state = AppState::default();
        state.validate_form();

        state.form.name = "Al".to_string();
        state.form.email = "al@example.com".to_string();
        state.form.password = "secret1".to_string();
        state.form.select_gender(Gender::Male);

        assert!(state.validate_form().is_some());
        assert!(state.field_errors.is_empty());
    }

    #[test]
    fn test_record_submission() {
        let mut state = AppState::default();
        let receipt = SubmissionReceipt::new();
        state.record_submission(receipt.clone());
        assert_eq!(state.submission_count, 1);
        assert_eq!(state.last_receipt, Some(receipt));
    }

    #[test]
    fn test_reset_form() {
        let mut state = AppState::default();
        state.input_char('A');
        state.validate_form();
        state.next_field();
        state.reset_form();
        assert_eq!(state.form, SignupForm::default());
        assert!(state.field_errors.is_empty());
        assert_eq!(state.focus, Focus::default());
        assert_eq!(state.gender_cursor, Gender::Male);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
