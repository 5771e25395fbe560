use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::parse_bookmark_id;
use super::BookmarkResponseData;
use crate::domain::auth::models::Identity;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_bookmark(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<BookmarkResponseData>, ApiError> {
    let bookmark_id = parse_bookmark_id(&id)?;

    state
        .bookmark_service
        .get_bookmark(&identity.user_id, &bookmark_id)
        .await
        .map_err(ApiError::from)
        .map(|ref bookmark| ApiSuccess::new(StatusCode::OK, bookmark.into()))
}
