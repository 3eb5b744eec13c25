//! Form domain layer
//!
//! Type-safe sign-up form state and the validator that checks it on submit.

mod field;
mod signup_form;
mod validation;

pub use field::{FieldId, Focus, Gender, TextField};
pub use signup_form::SignupForm;
pub use validation::{validate, ValidSignup, ValidationErrors};
