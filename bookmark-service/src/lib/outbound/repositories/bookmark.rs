use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::bookmark::errors::BookmarkError;
use crate::domain::bookmark::errors::BookmarkFieldError;
use crate::domain::bookmark::models::Bookmark;
use crate::domain::bookmark::models::BookmarkId;
use crate::domain::bookmark::models::BookmarkLink;
use crate::domain::bookmark::models::BookmarkTitle;
use crate::domain::bookmark::ports::BookmarkRepository;
use crate::domain::user::models::UserId;

pub struct PostgresBookmarkRepository {
    pool: PgPool,
}

impl PostgresBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookmarkRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    link: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = BookmarkError;

    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = move |e: BookmarkFieldError| {
            BookmarkError::DatabaseError(format!("Stored bookmark {} is invalid: {}", id, e))
        };

        Ok(Bookmark {
            id: BookmarkId(id),
            owner_id: UserId(row.user_id),
            title: BookmarkTitle::new(row.title).map_err(corrupt)?,
            description: row.description,
            link: BookmarkLink::new(row.link).map_err(corrupt)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> BookmarkError {
    BookmarkError::DatabaseError(e.to_string())
}

#[async_trait]
impl BookmarkRepository for PostgresBookmarkRepository {
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (id, user_id, title, description, link, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(bookmark.id.0)
        .bind(bookmark.owner_id.0)
        .bind(bookmark.title.as_str())
        .bind(&bookmark.description)
        .bind(bookmark.link.as_str())
        .bind(bookmark.created_at)
        .bind(bookmark.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(bookmark)
    }

    async fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, BookmarkError> {
        sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Bookmark::try_from)
        .transpose()
    }

    async fn find_by_id_and_owner(
        &self,
        id: &BookmarkId,
        owner_id: &UserId,
    ) -> Result<Option<Bookmark>, BookmarkError> {
        sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Bookmark::try_from)
        .transpose()
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Bookmark::try_from)
        .collect()
    }

    async fn update(&self, bookmark: Bookmark) -> Result<Option<Bookmark>, BookmarkError> {
        let result = sqlx::query(
            r#"
            UPDATE bookmarks
            SET title = $2, description = $3, link = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(bookmark.id.0)
        .bind(bookmark.title.as_str())
        .bind(&bookmark.description)
        .bind(bookmark.link.as_str())
        .bind(bookmark.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(bookmark))
    }

    async fn delete(&self, id: &BookmarkId) -> Result<bool, BookmarkError> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
