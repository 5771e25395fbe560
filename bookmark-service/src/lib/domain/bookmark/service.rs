use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::CreateBookmarkCommand;
use crate::domain::bookmark::models::EditBookmarkCommand;
use crate::domain::bookmark::ports::BookmarkRepository;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::domain::ownership::authorize;
use crate::domain::ownership::AccessDenied;
use crate::domain::user::models::UserId;

/// Concrete implementation of BookmarkServicePort.
///
/// Edit and delete look the bookmark up by id, check ownership, then write.
/// Nothing locks the row in between, so two concurrent deletes may both pass
/// the check; the loser then sees the row gone and reports `AccessDenied`.
pub struct BookmarkService<BR>
where
    BR: BookmarkRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookmarkService<BR>
where
    BR: BookmarkRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }

    async fn owned(&self, owner_id: &UserId, id: &BookmarkId) -> Result<Bookmark, BookmarkError> {
        let bookmark = self.repository.find_by_id(id).await?;
        authorize(owner_id, bookmark).map_err(|denied| {
            tracing::debug!(owner_id = %owner_id, bookmark_id = %id, "Bookmark access denied");
            BookmarkError::from(denied)
        })
    }
}

#[async_trait]
impl<BR> BookmarkServicePort for BookmarkService<BR>
where
    BR: BookmarkRepository,
{
    async fn list_bookmarks(&self, owner_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        self.repository.find_by_owner(owner_id).await
    }

    async fn get_bookmark(
        &self,
        owner_id: &UserId,
        id: &BookmarkId,
    ) -> Result<Bookmark, BookmarkError> {
        self.repository
            .find_by_id_and_owner(id, owner_id)
            .await?
            .ok_or(BookmarkError::AccessDenied(AccessDenied))
    }

    async fn create_bookmark(
        &self,
        owner_id: &UserId,
        command: CreateBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError> {
        let bookmark = self
            .repository
            .create(Bookmark::new(*owner_id, command))
            .await?;
        tracing::info!(owner_id = %owner_id, bookmark_id = %bookmark.id, "Bookmark created");

        Ok(bookmark)
    }

    async fn edit_bookmark(
        &self,
        owner_id: &UserId,
        id: &BookmarkId,
        command: EditBookmarkCommand,
    ) -> Result<Bookmark, BookmarkError> {
        let mut bookmark = self.owned(owner_id, id).await?;
        bookmark.apply(command);

        self.repository
            .update(bookmark)
            .await?
            .ok_or(BookmarkError::AccessDenied(AccessDenied))
    }

    async fn delete_bookmark(
        &self,
        owner_id: &UserId,
        id: &BookmarkId,
    ) -> Result<(), BookmarkError> {
        self.owned(owner_id, id).await?;

        if !self.repository.delete(id).await? {
            return Err(BookmarkError::AccessDenied(AccessDenied));
        }
        tracing::info!(owner_id = %owner_id, bookmark_id = %id, "Bookmark deleted");

        Ok(())
    }
}
