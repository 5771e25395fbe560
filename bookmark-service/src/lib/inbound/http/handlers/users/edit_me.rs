use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::UserResponseData;
use crate::domain::auth::models::Identity;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::errors::EmailError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::inbound::http::extract::RequestJson;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// HTTP request body for editing the current user (raw JSON)
#[derive(Debug, Deserialize)]
pub struct EditMeRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl EditMeRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, EmailError> {
        let email = self.email.map(EmailAddress::new).transpose()?;

        Ok(UpdateUserCommand {
            email,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}

pub async fn edit_me(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    RequestJson(req): RequestJson<EditMeRequest>,
) -> Result<ApiSuccess<UserResponseData>, ApiError> {
    let command = req
        .try_into_command()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .user_service
        .update_user(&identity.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
