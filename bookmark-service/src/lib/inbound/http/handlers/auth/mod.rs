use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::domain::auth::errors::PasswordInputError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Password;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;

pub mod sign_in;
pub mod sign_up;

pub use sign_in::sign_in;
pub use sign_up::sign_up;

/// HTTP request body shared by sign-up and sign-in (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseAuthRequestError {
    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordInputError),
}

impl AuthRequest {
    fn try_into_credentials(self) -> Result<Credentials, ParseAuthRequestError> {
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(Credentials::new(email, password))
    }
}

impl From<ParseAuthRequestError> for ApiError {
    fn from(err: ParseAuthRequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenResponseData {
    pub access_token: String,
}

impl From<AccessToken> for AccessTokenResponseData {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.0,
        }
    }
}
