pub mod auth;
pub mod bookmark;
pub mod ownership;
pub mod user;
