//! Submitter that records the sign-up as a diagnostic trace

use super::traits::{FormSubmitter, SubmissionReceipt};
use crate::state::ValidSignup;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;

const REDACTED: &str = "***";

/// Writes each submission to the log instead of sending it anywhere
#[derive(Debug, Default)]
pub struct LogSubmitter;

impl LogSubmitter {
    pub fn new() -> Self {
        Self
    }
}

/// JSON form of the sign-up with the password masked
fn redacted_payload(signup: &ValidSignup) -> Result<Value> {
    let mut payload = serde_json::to_value(signup).context("Failed to serialize sign-up")?;
    if let Some(password) = payload.get_mut("password") {
        *password = Value::String(REDACTED.to_string());
    }
    Ok(payload)
}

#[async_trait]
impl FormSubmitter for LogSubmitter {
    async fn submit(&mut self, signup: &ValidSignup) -> Result<SubmissionReceipt> {
        let receipt = SubmissionReceipt::new();
        let payload = redacted_payload(signup)?;
        tracing::info!(
            submission_id = %receipt.id,
            submitted_at = %receipt.submitted_at,
            "Form data: {payload}"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Gender;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn signup() -> ValidSignup {
        ValidSignup {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
            password: "secret1".to_string(),
            subscribe: true,
            gender: Gender::Female,
        }
    }

    #[test]
    fn test_payload_masks_password() {
        let payload = redacted_payload(&signup()).unwrap();
        assert_eq!(
            payload,
            json!({
                "name": "Al",
                "email": "al@example.com",
                "password": "***",
                "subscribe": true,
                "gender": "female",
            })
        );
    }

    #[tokio::test]
    async fn test_submit_returns_fresh_receipts() {
        let mut submitter = LogSubmitter::new();
        let first = submitter.submit(&signup()).await.unwrap();
        let second = submitter.submit(&signup()).await.unwrap();
        assert_ne!(first.id, second.id);
        assert!(second.submitted_at >= first.submitted_at);
    }

    #[test]
    fn test_submit_blocking() {
        let mut submitter = LogSubmitter::new();
        let receipt = tokio_test::block_on(submitter.submit(&signup()));
        assert!(receipt.is_ok());
    }
}
