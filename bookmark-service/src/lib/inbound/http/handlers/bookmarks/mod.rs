use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::domain::bookmark::errors::BookmarkFieldError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::BookmarkLink;
use crate::domain::bookmark::models::BookmarkTitle;
use crate::domain::bookmark::models::CreateBookmarkCommand;
use crate::domain::bookmark::models::EditBookmarkCommand;
use crate::inbound::http::handlers::ApiError;

pub mod create_bookmark;
pub mod delete_bookmark;
pub mod edit_bookmark;
pub mod get_bookmark;
pub mod list_bookmarks;

pub use create_bookmark::create_bookmark;
pub use delete_bookmark::delete_bookmark;
pub use edit_bookmark::edit_bookmark;
pub use get_bookmark::get_bookmark;
pub use list_bookmarks::list_bookmarks;

/// HTTP request body for creating a bookmark (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookmarkRequest {
    title: String,
    description: Option<String>,
    link: String,
}

impl CreateBookmarkRequest {
    fn try_into_command(self) -> Result<CreateBookmarkCommand, BookmarkFieldError> {
        Ok(CreateBookmarkCommand {
            title: BookmarkTitle::new(self.title)?,
            description: self.description,
            link: BookmarkLink::new(self.link)?,
        })
    }
}

/// HTTP request body for editing a bookmark (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditBookmarkRequest {
    title: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    description: Option<Option<String>>,
    link: Option<String>,
}

impl EditBookmarkRequest {
    fn try_into_command(self) -> Result<EditBookmarkCommand, BookmarkFieldError> {
        Ok(EditBookmarkCommand {
            title: self.title.map(BookmarkTitle::new).transpose()?,
            description: self.description,
            link: self.link.map(BookmarkLink::new).transpose()?,
        })
    }
}

/// Absent field stays `None` through `default`; a present field, `null`
/// included, becomes `Some`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<BookmarkFieldError> for ApiError {
    fn from(err: BookmarkFieldError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

fn parse_bookmark_id(id: &str) -> Result<BookmarkId, ApiError> {
    BookmarkId::from_string(id).map_err(|e| ApiError::BadRequest(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkResponseData {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Bookmark> for BookmarkResponseData {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.to_string(),
            user_id: bookmark.owner_id.to_string(),
            title: bookmark.title.as_str().to_string(),
            description: bookmark.description.clone(),
            link: bookmark.link.as_str().to_string(),
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}
