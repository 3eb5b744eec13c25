//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, FieldId, Focus};
use crate::submit::{FormSubmitter, SubmissionReceipt};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of one submit attempt
///
/// Every attempt runs Idle -> Validating -> Idle; the variant says which way
/// it left the validating step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submitter accepted the sign-up
    Submitted(SubmissionReceipt),
    /// Validation failed for this many fields
    Rejected(usize),
    /// Validation passed but the submitter returned an error
    Failed,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Downstream collaborator for valid sign-ups
    submitter: Box<dyn FormSubmitter>,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, submitter: Box<dyn FormSubmitter>) -> Self {
        Self {
            state: AppState::default(),
            config,
            submitter,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focus = self.state.focus;

        match key.code {
            KeyCode::Char('s') if ctrl => {
                self.submit().await;
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_field(),
            KeyCode::Left => self.state.cycle_gender(false),
            KeyCode::Right => self.state.cycle_gender(true),
            KeyCode::Enter => match focus {
                Focus::Field(FieldId::Subscribe) | Focus::Field(FieldId::Gender) => {
                    self.state.activate()
                }
                _ => {
                    self.submit().await;
                }
            },
            KeyCode::Char(' ') if !self.state.is_text_focused() => self.state.activate(),
            KeyCode::Char(c) if !ctrl => self.state.input_char(c),
            KeyCode::Backspace => self.state.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and hand it to the submitter if it passes
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.status_message = None;

        let Some(signup) = self.state.validate_form() else {
            let count = self.state.field_errors.len();
            for error in self.state.field_errors.iter() {
                tracing::debug!(field = %error.field, "{}", error.message);
            }
            tracing::info!("Submission rejected: {count} field(s) invalid");
            return SubmitOutcome::Rejected(count);
        };

        match self.submitter.submit(&signup).await {
            Ok(receipt) => {
                tracing::info!(submission_id = %receipt.id, "Submission accepted");
                self.status_message = Some(format!(
                    "Submitted at {}",
                    receipt.submitted_at.format("%H:%M:%S")
                ));
                self.state.record_submission(receipt.clone());
                if self.config.reset_on_submit() {
                    self.state.reset_form();
                }
                if self.config.quit_on_submit() {
                    self.quit = true;
                }
                SubmitOutcome::Submitted(receipt)
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err:#}");
                self.push_error(format!("Submission failed: {err}"));
                SubmitOutcome::Failed
            }
        }
    }
}
