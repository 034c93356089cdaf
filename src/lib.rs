//! In-memory user registration and session management.
//!
//! A deliberately small authentication scaffold: users and sessions live in
//! two maps owned by [`AuthService`], tokens are deterministic, passwords are
//! stored in cleartext. Nothing here is hardened for production use.
//!
//! All operations are synchronous and take `&mut self`; to share a service
//! across threads, wrap it in a `Mutex` yourself. The crate provides no
//! synchronization of its own.

pub mod auth;
pub mod error;
pub mod user;

pub use error::{AuthError, Error, ValidationError};
pub type Result<T> = std::result::Result<T, Error>;

pub use auth::{validate_email, validate_password, AuthService};
pub use user::{Role, User};
