use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::sign_in;
use super::handlers::auth::sign_up;
use super::handlers::bookmarks::create_bookmark;
use super::handlers::bookmarks::delete_bookmark;
use super::handlers::bookmarks::edit_bookmark;
use super::handlers::bookmarks::get_bookmark;
use super::handlers::bookmarks::list_bookmarks;
use super::handlers::users::edit_me;
use super::handlers::users::get_me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::bookmark::ports::BookmarkServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub bookmark_service: Arc<dyn BookmarkServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    user_service: Arc<dyn UserServicePort>,
    bookmark_service: Arc<dyn BookmarkServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        bookmark_service,
    };

    let public_routes = Router::new()
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in));

    let protected_routes = Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_me))
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark)
                .patch(edit_bookmark)
                .delete(delete_bookmark),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::http::header;
    use axum::http::Method;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;
    use mockall::mock;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::auth::errors::AuthError;
    use crate::domain::auth::models::AccessToken;
    use crate::domain::auth::models::Credentials;
    use crate::domain::auth::models::Identity;
    use crate::domain::bookmark::errors::BookmarkError;
    use crate::domain::bookmark::models::Bookmark;
    use crate::domain::bookmark::models::BookmarkId;
    use crate::domain::bookmark::models::CreateBookmarkCommand;
    use crate::domain::bookmark::models::EditBookmarkCommand;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::UpdateUserCommand;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use ::auth::JwtError;

    mock! {
        pub TestAuthService {}

        #[async_trait]
        impl AuthServicePort for TestAuthService {
            async fn sign_up(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;
            async fn sign_in(&self, credentials: Credentials) -> Result<AccessToken, AuthError>;
            fn identify(&self, token: &str) -> Result<Identity, AuthError>;
        }
    }

    mock! {
        pub TestUserService {}

        #[async_trait]
        impl UserServicePort for TestUserService {
            async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
            async fn update_user(&self, id: &UserId, command: UpdateUserCommand)
                -> Result<User, UserError>;
        }
    }

    mock! {
        pub TestBookmarkService {}

        #[async_trait]
        impl BookmarkServicePort for TestBookmarkService {
            async fn list_bookmarks(&self, owner_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError>;
            async fn get_bookmark(&self, owner_id: &UserId, id: &BookmarkId)
                -> Result<Bookmark, BookmarkError>;
            async fn create_bookmark(&self, owner_id: &UserId, command: CreateBookmarkCommand)
                -> Result<Bookmark, BookmarkError>;
            async fn edit_bookmark(&self, owner_id: &UserId, id: &BookmarkId, command: EditBookmarkCommand)
                -> Result<Bookmark, BookmarkError>;
            async fn delete_bookmark(&self, owner_id: &UserId, id: &BookmarkId)
                -> Result<(), BookmarkError>;
        }
    }

    fn router(
        auth_service: MockTestAuthService,
        bookmark_service: MockTestBookmarkService,
    ) -> Router {
        create_router(
            Arc::new(auth_service),
            Arc::new(MockTestUserService::new()),
            Arc::new(bookmark_service),
        )
    }

    fn request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_protected_route_without_token_skips_service() {
        let mut auth_service = MockTestAuthService::new();
        auth_service.expect_identify().times(0);
        let mut bookmark_service = MockTestBookmarkService::new();
        bookmark_service.expect_list_bookmarks().times(0);

        let response = router(auth_service, bookmark_service)
            .oneshot(request(Method::GET, "/bookmarks", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["status_code"], 401);
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthorized() {
        let mut auth_service = MockTestAuthService::new();
        auth_service
            .expect_identify()
            .times(1)
            .returning(|_| Err(AuthError::Token(JwtError::ExpiredToken)));

        let response = router(auth_service, MockTestBookmarkService::new())
            .oneshot(request(Method::GET, "/bookmarks", Some("stale")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Token has expired");
    }

    #[tokio::test]
    async fn test_identity_reaches_handler() {
        let user_id = UserId::new();

        let mut auth_service = MockTestAuthService::new();
        auth_service
            .expect_identify()
            .withf(|token| token == "good")
            .times(1)
            .returning(move |_| {
                Ok(Identity {
                    user_id,
                    email: "e@x.com".to_string(),
                })
            });

        let mut bookmark_service = MockTestBookmarkService::new();
        bookmark_service
            .expect_list_bookmarks()
            .withf(move |owner| *owner == user_id)
            .times(1)
            .returning(|_| Ok(vec![]));

        let response = router(auth_service, bookmark_service)
            .oneshot(request(Method::GET, "/bookmarks", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_store_failure_hides_details() {
        let mut auth_service = MockTestAuthService::new();
        auth_service.expect_identify().returning(|_| {
            Ok(Identity {
                user_id: UserId::new(),
                email: "e@x.com".to_string(),
            })
        });

        let mut bookmark_service = MockTestBookmarkService::new();
        bookmark_service
            .expect_list_bookmarks()
            .returning(|_| Err(BookmarkError::DatabaseError("connection reset".to_string())));

        let response = router(auth_service, bookmark_service)
            .oneshot(request(Method::GET, "/bookmarks", Some("good")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = router(MockTestAuthService::new(), MockTestBookmarkService::new())
            .oneshot(request(Method::GET, "/nowhere", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
