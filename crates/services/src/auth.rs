//! Bearer-token authentication against the remote auth endpoints.
//!
//! The content client never sees concrete auth state; it depends only on the
//! [`TokenProvider`] capability. Tokens live in process memory for the
//! lifetime of the app; nothing is persisted locally.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Capability to supply a bearer token for outbound requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Option<String>;
}

/// The authenticated user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
    user: User,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Clone)]
struct AuthState {
    token: String,
    user: User,
}

/// Login/register/logout plus the in-memory token cache.
pub struct AuthService {
    client: Client,
    base_url: String,
    state: RwLock<Option<AuthState>>,
}

impl AuthService {
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            state: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_ok_and(|state| state.is_some())
    }

    /// The cached user, if logged in.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.as_ref().map(|state| state.user.clone()))
    }

    /// Exchange credentials for a token and cache the session.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` on rejected credentials, `ApiError::Server`
    /// when the server explains the failure, transport/parse errors otherwise.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<User, ApiError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(credentials)
            .send()
            .await?;
        self.accept(response).await
    }

    /// Create an account; the server logs the new user straight in.
    ///
    /// # Errors
    ///
    /// Same surface as [`login`](Self::login).
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<User, ApiError> {
        let response = self
            .client
            .post(format!("{}/auth/register", self.base_url))
            .json(credentials)
            .send()
            .await?;
        self.accept(response).await
    }

    /// Re-fetch the current user from the server and refresh the cache.
    ///
    /// # Errors
    ///
    /// `ApiError::Unauthorized` when no token is held or the server rejects it.
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        let Some(token) = self.token_value() else {
            return Err(ApiError::Unauthorized);
        };
        let response = self
            .client
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(&token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.logout();
            return Err(ApiError::Unauthorized);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        let user: User = response
            .json()
            .await
            .map_err(|err| ApiError::Parse(err.to_string()))?;
        if let Ok(mut state) = self.state.write() {
            *state = Some(AuthState {
                token,
                user: user.clone(),
            });
        }
        Ok(user)
    }

    /// Drop the cached token and user. Purely local.
    pub fn logout(&self) {
        if let Ok(mut state) = self.state.write() {
            *state = None;
        }
    }

    fn token_value(&self) -> Option<String> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.as_ref().map(|state| state.token.clone()))
    }

    async fn accept(&self, response: reqwest::Response) -> Result<User, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            return Err(match response.json::<ErrorBody>().await {
                Ok(body) => ApiError::Server {
                    status,
                    message: body.message,
                },
                Err(_) => ApiError::Status(status),
            });
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|err| ApiError::Parse(err.to_string()))?;
        tracing::info!(user = %auth.user.username, "logged in");
        let user = auth.user.clone();
        if let Ok(mut state) = self.state.write() {
            *state = Some(AuthState {
                token: auth.token,
                user: auth.user,
            });
        }
        Ok(user)
    }
}

#[async_trait]
impl TokenProvider for AuthService {
    async fn token(&self) -> Option<String> {
        self.token_value()
    }
}

/// Provider that never supplies a token; for anonymous browsing and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

#[async_trait]
impl TokenProvider for NoToken {
    async fn token(&self) -> Option<String> {
        None
    }
}
