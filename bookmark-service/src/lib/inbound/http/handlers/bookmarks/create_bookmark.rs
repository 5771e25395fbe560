use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::BookmarkResponseData;
use super::CreateBookmarkRequest;
use crate::domain::auth::models::Identity;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::extract::RequestJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_bookmark(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    RequestJson(body): RequestJson<CreateBookmarkRequest>,
) -> Result<ApiSuccess<BookmarkResponseData>, ApiError> {
    state
        .bookmark_service
        .create_bookmark(&identity.user_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref bookmark| ApiSuccess::new(StatusCode::CREATED, bookmark.into()))
}
