//! Hand-off of validated sign-ups to a downstream collaborator

mod log_submitter;
mod traits;

pub use log_submitter::LogSubmitter;
pub use traits::{FormSubmitter, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockFormSubmitter;
