use async_trait::async_trait;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::CreateBookmarkCommand;
use crate::domain::bookmark::models::EditBookmarkCommand;
use crate::domain::user::models::UserId;

/// Port for bookmark operations on behalf of an authenticated owner.
///
/// A bookmark that does not exist and one owned by another user both yield
/// `AccessDenied`.
#[async_trait]
pub trait BookmarkServicePort: Send + Sync + 'static {
    /// All bookmarks owned by `owner_id`, oldest first. Empty when none.
    async fn list_bookmarks(&self, owner_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError>;

    /// # Errors
    /// * `AccessDenied` - Not found or not owned by `owner_id`
    /// * `DatabaseError` - Database operation failed
    async fn get_bookmark(
        &self,
        owner_id: &UserId,
        id: &BookmarkId,
    ) -> Result<Bookmark, BookmarkError>;

    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_bookmark(
        &self,
        owner_id: &UserId,
        command: CreateBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError>;

    /// # Errors
    /// * `AccessDenied` - Not found or not owned by `owner_id`
    /// * `DatabaseError` - Database operation failed
    async fn edit_bookmark(
        &self,
        owner_id: &UserId,
        id: &BookmarkId,
        command: EditBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError>;

    /// Not idempotent: a second delete of the same id is `AccessDenied`.
    ///
    /// # Errors
    /// * `AccessDenied` - Not found or not owned by `owner_id`
    /// * `DatabaseError` - Database operation failed
    async fn delete_bookmark(&self, owner_id: &UserId, id: &BookmarkId)
        -> Result<(), BookmarkError>;
}

/// Persistence operations for bookmarks.
#[async_trait]
pub trait BookmarkRepository: Send + Sync + 'static {
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError>;

    /// Lookup by id alone, regardless of owner.
    async fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, BookmarkError>;

    /// Lookup scoped to an owner: another owner's bookmark is `None`.
    async fn find_by_id_and_owner(
        &self,
        id: &BookmarkId,
        owner_id: &UserId,
    ) -> Result<Option<Bookmark>, BookmarkError>;

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError>;

    /// Persist changed fields of an existing bookmark.
    ///
    /// # Returns
    /// The stored bookmark, or None if it no longer exists
    async fn update(&self, bookmark: Bookmark) -> Result<Option<Bookmark>, BookmarkError>;

    /// # Returns
    /// Whether a row was removed
    async fn delete(&self, id: &BookmarkId) -> Result<bool, BookmarkError>;
}
