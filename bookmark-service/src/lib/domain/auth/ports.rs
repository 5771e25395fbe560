use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Identity;

/// Port for credential verification and token issuance.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new credential and issue a token for it.
    ///
    /// # Errors
    /// * `DuplicateEmail` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `Token` - Token generation failed
    /// * `User` - Any other store failure, unchanged
    async fn sign_up(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Verify a credential and issue a token for it.
    ///
    /// # Errors
    /// * `UnknownUser` - No user with this email
    /// * `BadCredential` - Password does not match
    /// * `Password` - Stored hash is corrupted
    /// * `Token` - Token generation failed
    /// * `User` - Store failure, unchanged
    async fn sign_in(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;

    /// Decode a bearer token into the identity it was issued for.
    ///
    /// # Errors
    /// * `Token` - Token is invalid, expired, or carries no usable subject
    fn identify(&self, token: &str) -> Result<Identity, AuthError>;
}
