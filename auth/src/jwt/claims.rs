use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

const EMAIL_CLAIM: &str = "email";

/// Identity token claims.
///
/// `sub`, `iat` and `exp` are set by [`crate::TokenService::issue`]; anything
/// else travels in `extra`, flattened into the token payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims carrying the principal's email address.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self::new().with_extra(EMAIL_CLAIM, email.into())
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Email from extra fields.
    pub fn email(&self) -> Option<&str> {
        self.extra.get(EMAIL_CLAIM).and_then(|v| v.as_str())
    }
}
