use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use bookmark_service::domain::auth::service::AuthService;
use bookmark_service::domain::bookmark::errors::BookmarkError;
use bookmark_service::domain::bookmark::models::Bookmark;
use bookmark_service::domain::bookmark::models::BookmarkId;
use bookmark_service::domain::bookmark::ports::BookmarkRepository;
use bookmark_service::domain::bookmark::service::BookmarkService;
use bookmark_service::domain::user::errors::UserError;
use bookmark_service::domain::user::models::EmailAddress;
use bookmark_service::domain::user::models::User;
use bookmark_service::domain::user::models::UserId;
use bookmark_service::domain::user::ports::UserRepository;
use bookmark_service::domain::user::service::UserService;
use bookmark_service::inbound::http::router::create_router;
use chrono::Duration;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// User store kept in memory, enforcing email uniqueness like the
/// `users_email_key` constraint.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| UserError::NotFound(user.id.to_string()))?;
        *slot = user.clone();
        Ok(user)
    }
}

/// Bookmark store kept in memory; insertion order stands in for
/// `created_at` ordering.
#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: Mutex<Vec<Bookmark>>,
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn create(&self, bookmark: Bookmark) -> Result<Bookmark, BookmarkError> {
        self.bookmarks.lock().unwrap().push(bookmark.clone());
        Ok(bookmark)
    }

    async fn find_by_id(&self, id: &BookmarkId) -> Result<Option<Bookmark>, BookmarkError> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks.iter().find(|b| b.id == *id).cloned())
    }

    async fn find_by_id_and_owner(
        &self,
        id: &BookmarkId,
        owner_id: &UserId,
    ) -> Result<Option<Bookmark>, BookmarkError> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks
            .iter()
            .find(|b| b.id == *id && b.owner_id == *owner_id)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: &UserId) -> Result<Vec<Bookmark>, BookmarkError> {
        let bookmarks = self.bookmarks.lock().unwrap();
        Ok(bookmarks
            .iter()
            .filter(|b| b.owner_id == *owner_id)
            .cloned()
            .collect())
    }

    async fn update(&self, bookmark: Bookmark) -> Result<Option<Bookmark>, BookmarkError> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        match bookmarks.iter_mut().find(|b| b.id == bookmark.id) {
            Some(slot) => {
                *slot = bookmark.clone();
                Ok(Some(bookmark))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &BookmarkId) -> Result<bool, BookmarkError> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != *id);
        Ok(bookmarks.len() < before)
    }
}

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with the default five minute token lifetime
    pub async fn spawn() -> Self {
        Self::with_ttl(Duration::minutes(5)).await
    }

    /// Spawn the application with a custom token lifetime. A negative
    /// lifetime issues tokens that are already expired.
    pub async fn with_ttl(ttl: Duration) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(
            Authenticator::new(TEST_SECRET, ttl).expect("Failed to create authenticator"),
        );

        let user_repo = Arc::new(InMemoryUserRepository::default());
        let bookmark_repo = Arc::new(InMemoryBookmarkRepository::default());

        let auth_service = Arc::new(AuthService::new(Arc::clone(&user_repo), authenticator));
        let user_service = Arc::new(UserService::new(user_repo));
        let bookmark_service = Arc::new(BookmarkService::new(bookmark_repo));

        let router = create_router(auth_service, user_service, bookmark_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PATCH request
    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user and return the issued access token
    pub async fn sign_up(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/sign-up")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Create a bookmark and return its JSON representation
    pub async fn create_bookmark(&self, token: &str, title: &str, link: &str) -> Value {
        let response = self
            .post("/bookmarks")
            .bearer_auth(token)
            .json(&json!({ "title": title, "link": link }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        response.json().await.expect("Failed to parse response")
    }
}
