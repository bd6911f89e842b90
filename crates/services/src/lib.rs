#![forbid(unsafe_code)]

pub mod auth;
pub mod content_client;
pub mod error;
pub mod quiz_service;

pub use auth::{AuthService, LoginCredentials, NoToken, RegisterCredentials, TokenProvider, User};
pub use content_client::ContentClient;
pub use error::{ApiError, QuizServiceError};
pub use quiz_service::QuizService;
