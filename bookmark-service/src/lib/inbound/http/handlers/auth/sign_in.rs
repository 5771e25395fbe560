use axum::extract::State;
use axum::http::StatusCode;

use super::AccessTokenResponseData;
use super::AuthRequest;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::extract::RequestJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    RequestJson(body): RequestJson<AuthRequest>,
) -> Result<ApiSuccess<AccessTokenResponseData>, ApiError> {
    state
        .auth_service
        .sign_in(body.try_into_credentials()?)
        .await
        .map_err(ApiError::from)
        .map(|token| ApiSuccess::new(StatusCode::OK, token.into()))
}
