//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the bookmark service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited identity tokens (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify(&hash, "my_password").unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{Claims, TokenService};
//! use chrono::Duration;
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let token = service
//!     .issue("user123", Claims::with_email("alice@example.com"), Duration::minutes(5))
//!     .unwrap();
//! let claims = service.verify(&token).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("user123"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(5)).unwrap();
//!
//! // Sign-up: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Sign-in: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, "user123", Claims::with_email("alice@example.com"))
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.email(), Some("alice@example.com"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenService;
pub use password::PasswordError;
pub use password::PasswordHasher;
