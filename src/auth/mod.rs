//! Authentication module
//!
//! Handles registration, credential checks, and session tokens.

mod service;
mod validation;

pub use service::AuthService;
pub use validation::{validate_email, validate_password};
