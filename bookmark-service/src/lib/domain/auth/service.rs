use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Claims;
use auth::JwtError;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::Credentials;
use crate::domain::auth::models::Identity;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Sign-up and sign-in over a user store.
///
/// Holds no per-user state: every call stands alone, and tokens are the only
/// thing a client carries between calls.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn issue_for(&self, identity: &Identity) -> Result<AccessToken, AuthError> {
        let token = self
            .authenticator
            .issue_token(identity.user_id, Claims::with_email(identity.email.clone()))?;
        Ok(AccessToken(token))
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.as_str().to_string(),
        }
    }
}

impl TryFrom<Claims> for Identity {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let subject = claims
            .sub
            .as_deref()
            .ok_or_else(|| JwtError::InvalidToken("missing subject".to_string()))?;
        let user_id = UserId::from_string(subject)
            .map_err(|e| JwtError::InvalidToken(format!("bad subject: {}", e)))?;
        let email = claims
            .email()
            .ok_or_else(|| JwtError::InvalidToken("missing email".to_string()))?
            .to_string();

        Ok(Self { user_id, email })
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let password_hash = self
            .authenticator
            .hash_password(credentials.password.as_str())?;

        let user = self
            .repository
            .create(User::new(credentials.email, password_hash))
            .await
            .map_err(|e| match e {
                UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
                other => AuthError::User(other),
            })?;

        let identity = Identity::from(&user);
        tracing::info!(user_id = %identity.user_id, "User signed up");

        self.issue_for(&identity)
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<AccessToken, AuthError> {
        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| AuthError::UnknownUser(credentials.email.to_string()))?;

        let identity = Identity::from(&user);
        let result = self
            .authenticator
            .authenticate(
                credentials.password.as_str(),
                &user.password_hash,
                identity.user_id,
                Claims::with_email(identity.email.clone()),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::BadCredential,
                AuthenticationError::PasswordError(err) => AuthError::Password(err),
                AuthenticationError::JwtError(err) => AuthError::Token(err),
            })?;

        tracing::info!(user_id = %identity.user_id, "User signed in");

        Ok(AccessToken(result.access_token))
    }

    fn identify(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.authenticator.validate_token(token)?;
        Ok(Identity::try_from(claims)?)
    }
}
