use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::extract::Request;
use axum::Json;
use serde::de::DeserializeOwned;

use super::handlers::ApiError;

/// JSON body extractor that rejects with `400 Bad Request`.
///
/// Missing content type, malformed JSON, missing fields and wrong field
/// types are all input-shape errors for this API.
pub struct RequestJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RequestJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| RequestJson(value))
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))
    }
}
