//! Wire types shared by the API client and its callers.
//!
//! Shapes follow the backend's JSON contract. The client passes records
//! through as-is; nothing here validates field lengths or formats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERRORS
// =============================================================================

/// Failure raised by an [`ApiClient`](super::api::ApiClient) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connect, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status. `message` is the body's
    /// `detail` field when present, otherwise the operation's default text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A 2xx response body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Human-readable text suitable for showing to a user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for rejections, `None` for everything else.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// EMOJIS
// =============================================================================

/// An emoji record as returned by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub id: i64,
    pub symbol: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub submitter_email: Option<String>,
    #[serde(default)]
    pub can_delete: bool,
}

/// Body for `POST /api/emojis`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmojiCreate {
    pub symbol: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter_email: Option<String>,
}

/// Body for `PUT /api/emojis/{id}`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmojiUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Paginated envelope for `GET /api/emojis`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiPage {
    pub items: Vec<Emoji>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

/// Sort orders understood by the list endpoint.
///
/// Travels only in the query string, spelled by [`EmojiSort::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmojiSort {
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl EmojiSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DateDesc => "date_desc",
            Self::DateAsc => "date_asc",
            Self::TitleAsc => "title_asc",
            Self::TitleDesc => "title_desc",
        }
    }
}

impl std::str::FromStr for EmojiSort {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "date_desc" => Ok(Self::DateDesc),
            "date_asc" => Ok(Self::DateAsc),
            "title_asc" => Ok(Self::TitleAsc),
            "title_desc" => Ok(Self::TitleDesc),
            other => Err(format!(
                "unknown sort '{other}' (expected date_desc, date_asc, title_asc or title_desc)"
            )),
        }
    }
}

/// Filters for `GET /api/emojis`.
///
/// Only parameters the caller actually supplied end up in the query string.
/// Empty strings and zero `limit`/`offset` count as not supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmojiQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<EmojiSort>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl EmojiQuery {
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: EmojiSort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Render as `?k=v&...`, or an empty string when nothing was supplied.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut params = url::form_urlencoded::Serializer::new(String::new());
        let mut any = false;

        let text = [("search", &self.search), ("category", &self.category)];
        for (key, value) in text {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.append_pair(key, value);
                any = true;
            }
        }
        if let Some(sort) = self.sort {
            params.append_pair("sort", sort.as_str());
            any = true;
        }
        let numbers = [("limit", self.limit), ("offset", self.offset)];
        for (key, value) in numbers {
            if let Some(value) = value.filter(|v| *v != 0) {
                params.append_pair(key, &value.to_string());
                any = true;
            }
        }

        if any { format!("?{}", params.finish()) } else { String::new() }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Public view of an account, as returned by `/api/auth/me` and registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

fn default_true() -> bool {
    true
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Bearer credential issued by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Reply from both password-reset endpoints.
///
/// `reset_token` is only present on the request endpoint, and only when the
/// backend runs without outbound email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetResponse {
    pub message: String,
    #[serde(default)]
    pub reset_token: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct PasswordResetRequestBody<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub(crate) struct PasswordResetConfirmBody<'a> {
    pub token: &'a str,
    pub new_password: &'a str,
}
