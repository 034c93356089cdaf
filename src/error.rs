use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid role: {0} (must be one of: user, admin, moderator)")]
    InvalidRole(String),
}

/// Rejected registration input. Recoverable; the caller should re-prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters with uppercase and digit")]
    WeakPassword,

    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

/// Failed login. Unknown email and wrong password share one variant so the
/// caller cannot tell which field was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account not activated")]
    AccountNotActivated,
}
