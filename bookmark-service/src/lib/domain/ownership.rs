//! Ownership-based authorization.
//!
//! Every owned resource is bound to exactly one user id at creation. Access is
//! granted only to that user; a resource that does not exist is refused the
//! same way as one owned by someone else, so callers cannot discover other ids.

use thiserror::Error;

use crate::domain::user::models::UserId;

/// A resource bound to a single owning user.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Access to this resource is denied")]
pub struct AccessDenied;

/// Allow iff `resource` exists and is owned by `identity`.
pub fn authorize<R: Owned>(identity: &UserId, resource: Option<R>) -> Result<R, AccessDenied> {
    match resource {
        Some(resource) if resource.owner_id() == *identity => Ok(resource),
        _ => Err(AccessDenied),
    }
}
