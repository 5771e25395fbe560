use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenService;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Owns the signing secret and the token TTL, both injected at construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Validity window of issued tokens
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(jwt_secret)?,
            token_ttl,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash is corrupted
    pub fn verify_password(&self, stored_hash: &str, password: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(stored_hash, password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Principal the token is issued for
    /// * `claims` - Custom claims to encode in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is corrupted
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        claims: Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(stored_hash, password)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject, claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Used right after sign-up, when the credential was just created.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: impl ToString, claims: Claims) -> Result<String, JwtError> {
        self.token_service.issue(subject, claims, self.token_ttl)
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or format is wrong
    /// * `ExpiredToken` - Token is past its expiry
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.token_service.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(b"test_secret_key_at_least_32_bytes!", Duration::minutes(5))
            .expect("Failed to create authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", Claims::with_email("e@x.com"))
            .expect("Authentication failed");

        let decoded = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded.sub, Some("user123".to_string()));
        assert_eq!(decoded.email(), Some("e@x.com"));
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123", Claims::new());
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupted_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("password", "not-a-phc-string", "user123", Claims::new());
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(PasswordError::CorruptedHash(_)))
        ));
    }

    #[test]
    fn test_issued_token_uses_configured_ttl() {
        let authenticator =
            Authenticator::new(b"test_secret_key_at_least_32_bytes!", Duration::minutes(7)).unwrap();

        let token = authenticator.issue_token("user123", Claims::new()).unwrap();
        let claims = authenticator.validate_token(&token).unwrap();

        assert_eq!(claims.exp.unwrap() - claims.iat.unwrap(), 7 * 60);
    }

    #[test]
    fn test_negative_ttl_issues_expired_tokens() {
        let authenticator =
            Authenticator::new(b"test_secret_key_at_least_32_bytes!", Duration::seconds(-1)).unwrap();

        let token = authenticator.issue_token("user123", Claims::new()).unwrap();

        assert_eq!(
            authenticator.validate_token(&token),
            Err(JwtError::ExpiredToken)
        );
    }

    #[test]
    fn test_missing_secret() {
        assert!(matches!(
            Authenticator::new(b"", Duration::minutes(5)),
            Err(JwtError::MissingSecret)
        ));
    }
}
