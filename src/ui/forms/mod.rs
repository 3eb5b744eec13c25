//! Form rendering module
//!
//! - `field_renderer`: text input, checkbox, radio group and inline error widgets
//! - `signup_form`: the sign-up screen

mod field_renderer;
mod signup_form;

pub use signup_form::{draw_signup_form, FORM_HEIGHT};
