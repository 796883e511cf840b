//! REST API client for the emoji catalog backend.
//!
//! Every method issues exactly one request through the configured
//! [`HttpTransport`] and decodes the JSON reply.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies become [`ApiError::Rejected`] carrying the body's `detail`
//! text, or a fixed per-operation message when the body has none. Two calls
//! soften this: `fetch_emojis` never fails (it serves the bundled catalog
//! instead) and `fetch_current_user` reports "not signed in" as `Ok(None)`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use super::types::{
    ApiError, Emoji, EmojiCreate, EmojiPage, EmojiQuery, EmojiUpdate, LoginRequest,
    PasswordResetConfirmBody, PasswordResetRequestBody, PasswordResetResponse, RegisterRequest,
    Token, User,
};
use crate::config::normalize_base_url;
use crate::data::mock_emojis::mock_page;

const LOAD_FAILED: &str = "Failed to load emojis";
const SUBMIT_FAILED: &str = "Failed to submit emoji";
const UPDATE_FAILED: &str = "Failed to update emoji";
const DELETE_FAILED: &str = "Failed to delete emoji";
const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";
const RESET_REQUEST_FAILED: &str = "Failed to request password reset";
const RESET_CONFIRM_FAILED: &str = "Failed to reset password";

/// Result of listing emojis: live data, or the bundled catalog when the live
/// fetch failed for any reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmojiFeed {
    Live(EmojiPage),
    Fallback(EmojiPage),
}

impl EmojiFeed {
    #[must_use]
    pub fn page(&self) -> &EmojiPage {
        match self {
            Self::Live(page) | Self::Fallback(page) => page,
        }
    }

    #[must_use]
    pub fn into_page(self) -> EmojiPage {
        match self {
            Self::Live(page) | Self::Fallback(page) => page,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiClient<super::transport::ReqwestTransport> {
    /// Build a native client from config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the TLS backend cannot be
    /// initialized.
    pub fn from_config(config: &crate::config::ClientConfig) -> Result<Self, ApiError> {
        let transport = super::transport::ReqwestTransport::new(config.request_timeout())?;
        Ok(Self::with_transport(&config.base_url, transport))
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl ApiClient<super::transport::GlooTransport> {
    #[must_use]
    pub fn from_config(config: &crate::config::ClientConfig) -> Self {
        Self::with_transport(&config.base_url, super::transport::GlooTransport)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    #[must_use]
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self { base_url: normalize_base_url(base_url), transport }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // EMOJIS
    // =========================================================================

    /// List emojis via `GET /api/emojis`.
    ///
    /// Never fails: transport errors, non-2xx replies and malformed bodies all
    /// yield [`EmojiFeed::Fallback`] with the bundled catalog.
    pub async fn fetch_emojis(&self, token: Option<&str>, query: &EmojiQuery) -> EmojiFeed {
        match self.try_fetch_emojis(token, query).await {
            Ok(page) => EmojiFeed::Live(page),
            Err(error) => {
                tracing::warn!(%error, "falling back to mock emojis");
                EmojiFeed::Fallback(mock_page())
            }
        }
    }

    async fn try_fetch_emojis(
        &self,
        token: Option<&str>,
        query: &EmojiQuery,
    ) -> Result<EmojiPage, ApiError> {
        let url = format!("{}{}", self.url("/api/emojis"), query.to_query_string());
        let request = build_request(Method::Get, url, token, None);
        let response = self.execute(request, LOAD_FAILED).await?;
        decode(&response)
    }

    /// Create an emoji via `POST /api/emojis`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for non-2xx replies, or a transport/decode
    /// error.
    pub async fn submit_emoji(
        &self,
        payload: &EmojiCreate,
        token: Option<&str>,
    ) -> Result<Emoji, ApiError> {
        self.send_json(Method::Post, "/api/emojis", token, Some(payload), SUBMIT_FAILED)
            .await
    }

    /// Replace fields of an emoji via `PUT /api/emojis/{id}`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_emoji`].
    pub async fn update_emoji(
        &self,
        id: i64,
        payload: &EmojiUpdate,
        token: Option<&str>,
    ) -> Result<Emoji, ApiError> {
        let path = format!("/api/emojis/{id}");
        self.send_json(Method::Put, &path, token, Some(payload), UPDATE_FAILED)
            .await
    }

    /// Delete an emoji via `DELETE /api/emojis/{id}`. The reply body is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Self::submit_emoji`], minus decode errors.
    pub async fn delete_emoji(&self, id: i64, token: Option<&str>) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/emojis/{id}"));
        let request = build_request(Method::Delete, url, token, None);
        self.execute(request, DELETE_FAILED).await?;
        Ok(())
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Create an account via `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (e.g. "Email already registered").
    pub async fn register_user(&self, payload: &RegisterRequest) -> Result<User, ApiError> {
        self.send_json(Method::Post, "/api/auth/register", None, Some(payload), REGISTER_FAILED)
            .await
    }

    /// Exchange credentials for a bearer token via `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (e.g. "Incorrect email or password").
    pub async fn login_user(&self, payload: &LoginRequest) -> Result<Token, ApiError> {
        self.send_json(Method::Post, "/api/auth/login", None, Some(payload), LOGIN_FAILED)
            .await
    }

    /// Fetch the account behind `token` from `/api/auth/me`.
    ///
    /// Returns `Ok(None)` without touching the network when `token` is absent
    /// or empty, and `Ok(None)` when the server rejects it.
    ///
    /// # Errors
    ///
    /// Transport failures and malformed 2xx bodies still propagate.
    pub async fn fetch_current_user(&self, token: Option<&str>) -> Result<Option<User>, ApiError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let request = build_request(Method::Get, self.url("/api/auth/me"), Some(token), None);
        let response = self.dispatch(request).await?;
        if !response.is_ok() {
            return Ok(None);
        }
        decode(&response).map(Some)
    }

    /// Ask for a password-reset token via `POST /api/auth/password-reset/request`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for non-2xx replies.
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<PasswordResetResponse, ApiError> {
        let body = PasswordResetRequestBody { email };
        self.send_json(
            Method::Post,
            "/api/auth/password-reset/request",
            None,
            Some(&body),
            RESET_REQUEST_FAILED,
        )
        .await
    }

    /// Set a new password via `POST /api/auth/password-reset/confirm`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] (e.g. "Invalid or expired token").
    pub async fn confirm_password_reset(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<PasswordResetResponse, ApiError> {
        let body = PasswordResetConfirmBody { token, new_password };
        self.send_json(
            Method::Post,
            "/api/auth/password-reset/confirm",
            None,
            Some(&body),
            RESET_CONFIRM_FAILED,
        )
        .await
    }

    // =========================================================================
    // PLUMBING
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
        default_message: &str,
    ) -> Result<R, ApiError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = build_request(method, self.url(path), token, body);
        let response = self.execute(request, default_message).await?;
        decode(&response)
    }

    /// Send and turn any non-2xx reply into [`ApiError::Rejected`].
    async fn execute(
        &self,
        request: HttpRequest,
        default_message: &str,
    ) -> Result<HttpResponse, ApiError> {
        let response = self.dispatch(request).await?;
        if !response.is_ok() {
            return Err(ApiError::Rejected {
                status: response.status,
                message: rejection_message(&response.body, default_message),
            });
        }
        Ok(response)
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "api request");
        let response = self.transport.send(request).await?;
        tracing::debug!(status = response.status, "api response");
        Ok(response)
    }
}

/// Attach the JSON content type when there is a body and the bearer header
/// only when a non-empty token was supplied.
fn build_request(
    method: Method,
    url: String,
    token: Option<&str>,
    body: Option<String>,
) -> HttpRequest {
    let mut headers = Vec::new();
    if body.is_some() {
        headers.push(("Content-Type", "application/json".to_owned()));
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    HttpRequest { method, url, headers, body }
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull `detail` out of an error body, falling back to `default_message`.
///
/// A non-string `detail` (validation errors arrive as arrays) is rendered as
/// its JSON text.
fn rejection_message(body: &[u8], default_message: &str) -> String {
    let detail = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());
    match detail {
        Some(serde_json::Value::String(text)) => text,
        Some(serde_json::Value::Null) | None => default_message.to_owned(),
        Some(other) => other.to_string(),
    }
}
