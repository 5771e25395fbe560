use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::bookmark::errors::BookmarkFieldError;
use crate::domain::bookmark::errors::BookmarkIdError;
use crate::domain::ownership::Owned;
use crate::domain::user::models::UserId;

/// Bookmark entity.
///
/// `owner_id` is set once, from the creating identity, and no operation
/// changes it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub owner_id: UserId,
    pub title: BookmarkTitle,
    pub description: Option<String>,
    pub link: BookmarkLink,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(owner_id: UserId, command: CreateBookmarkCommand) -> Self {
        let now = Utc::now();
        Self {
            id: BookmarkId::new(),
            owner_id,
            title: command.title,
            description: command.description,
            link: command.link,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the fields present in `command`; the rest stay as they are.
    pub fn apply(&mut self, command: EditBookmarkCommand) {
        if let Some(title) = command.title {
            self.title = title;
        }
        if let Some(description) = command.description {
            self.description = description;
        }
        if let Some(link) = command.link {
            self.link = link;
        }
        self.updated_at = Utc::now();
    }
}

impl Owned for Bookmark {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Bookmark unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookmarkId(pub Uuid);

impl BookmarkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, BookmarkIdError> {
        Uuid::parse_str(s)
            .map(BookmarkId)
            .map_err(|e| BookmarkIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty bookmark title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    pub fn new(title: String) -> Result<Self, BookmarkFieldError> {
        non_empty(title, "title").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-empty bookmark link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkLink(String);

impl BookmarkLink {
    pub fn new(link: String) -> Result<Self, BookmarkFieldError> {
        non_empty(link, "link").map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, BookmarkFieldError> {
    if value.trim().is_empty() {
        Err(BookmarkFieldError::Empty(field))
    } else {
        Ok(value)
    }
}

/// Command to create a bookmark. The owner comes from the caller's identity.
#[derive(Debug, Clone)]
pub struct CreateBookmarkCommand {
    pub title: BookmarkTitle,
    pub description: Option<String>,
    pub link: BookmarkLink,
}

/// Command to edit a bookmark; only supplied fields change.
///
/// `description` is `Some(None)` when the caller clears it.
#[derive(Debug, Clone, Default)]
pub struct EditBookmarkCommand {
    pub title: Option<BookmarkTitle>,
    pub description: Option<Option<String>>,
    pub link: Option<BookmarkLink>,
}
