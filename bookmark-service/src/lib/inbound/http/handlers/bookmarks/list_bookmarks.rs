use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::BookmarkResponseData;
use crate::domain::auth::models::Identity;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_bookmarks(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<Vec<BookmarkResponseData>>, ApiError> {
    state
        .bookmark_service
        .list_bookmarks(&identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|bookmarks| {
            ApiSuccess::new(
                StatusCode::OK,
                bookmarks.iter().map(BookmarkResponseData::from).collect(),
            )
        })
}
