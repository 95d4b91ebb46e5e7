//! # Transport
//!
//! POST-JSON client for the backend API. Every call goes through the same
//! pipeline:
//!
//! ```text
//! request (camelCase)
//!      ↓  encode_to_wire_format
//! body (snake_case) ──POST──> backend
//!                                ↓
//! response (camelCase) <── decode_from_wire_format ── body (snake_case)
//! ```
//!
//! Encoding always completes before the request is sent and decoding only
//! starts once the whole body has been received.
//!
//! ## Errors
//!
//! Failures are reported as [`ApiError`]:
//! - **`Config`** - no API base URL configured
//! - **`Encode`** - the request value could not be serialized
//! - **`Request`** - network or reqwest error
//! - **`Status`** - the backend answered with a non-2xx status
//! - **`Decode`** - the response body was not JSON or did not fit the
//!   expected response type
//!
//! Retries and authentication are left to the caller.

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{config, transcode};

/// Failure of a transport call; see the module docs for each variant.
#[derive(Debug)]
pub enum ApiError {
    Config(String),
    Encode(serde_json::Error),
    Request(reqwest::Error),
    Status { status: StatusCode, body: String },
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "configuration error: {}", msg),
            ApiError::Encode(e) => write!(f, "cannot encode request body: {}", e),
            ApiError::Request(e) => write!(f, "request failed: {}", e),
            ApiError::Status { status, body } if body.is_empty() => {
                write!(f, "server responded with {}", status)
            }
            ApiError::Status { status, body } => {
                write!(f, "server responded with {}: {}", status, body)
            }
            ApiError::Decode(e) => write!(f, "cannot decode response body: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Encode(e) | ApiError::Decode(e) => Some(e),
            ApiError::Request(e) => Some(e),
            ApiError::Config(_) | ApiError::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err)
    }
}

/// Client bound to one API base URL, e.g. `https://example.com`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Creates a client for `base_url`; a trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Builds a client for the base URL in `WIRECASE_API_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        config::api_url().map(Self::new).map_err(ApiError::Config)
    }

    /// Base URL without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `req` to `path` with the standard encoding and returns the
    /// decoded response.
    ///
    /// `req` is expected in the application convention (camelCase, usually
    /// via `#[serde(rename_all = "camelCase")]`), and `Resp` is deserialized
    /// from the camelCase form of the response body.
    ///
    /// # Example
    ///
    /// ```
    /// let client = ApiClient::new("http://127.0.0.1:8080");
    /// let resp: LoginUserResponse = client
    ///     .post_with_standard_encoding("/api/useraccounts/login_user_1", &req)
    ///     .await?;
    /// ```
    pub async fn post_with_standard_encoding<Req, Resp>(
        &self,
        path: &str,
        req: &Req,
    ) -> Result<Resp, ApiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let body = transcode::encode_to_wire_format(req).map_err(ApiError::Encode)?;
        let wire = self.send(path, &body).await?;
        transcode::decode_from_wire_format(&wire).map_err(ApiError::Decode)
    }

    /// Same pipeline as [`post_with_standard_encoding`](Self::post_with_standard_encoding)
    /// for untyped documents.
    pub async fn post_value(&self, path: &str, req: &Value) -> Result<Value, ApiError> {
        let body = transcode::encode_value(req);
        let wire = self.send(path, &body).await?;
        Ok(transcode::decode_value(&wire))
    }

    /// Full URL for an endpoint `path`, with or without a leading `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.base_url,
            path = path.trim_start_matches('/')
        )
    }

    async fn send(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self.client.post(self.url_for(path)).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            // body is best effort, the status is what matters
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ApiError::Decode)
    }
}
