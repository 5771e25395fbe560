use auth::JwtError;
use auth::PasswordError;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for Password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordInputError {
    #[error("Password must not be empty")]
    Empty,
}

/// Errors raised while signing up or signing in.
///
/// Sign-in reports an unknown email and a wrong password with distinct
/// messages, which reveals whether an account exists for an email.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Email already exists")]
    DuplicateEmail(String),

    #[error("User doesn't exist")]
    UnknownUser(String),

    #[error("Incorrect password")]
    BadCredential,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error(transparent)]
    User(#[from] UserError),
}
