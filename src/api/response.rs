//! Decoding of backend responses into typed outcomes.
//!
//! Every `WebRequestResult` is decoded against the [`ApiRequest`] that produced
//! it into one [`ApiResponse`] variant. Decoding never fails: malformed bodies
//! and failure statuses become the failure variant of the operation, so the
//! event handler only has to decide what to show.
//!
//! # Response shapes
//!
//! | operation   | success body                              | failure body                 |
//! |-------------|-------------------------------------------|------------------------------|
//! | `FetchUrls` | `[record, ...]` or `{ total, urls: [...] }` | anything                   |
//! | `Shorten`   | created record (not required)             | `{ message: { message } }`   |
//! | `Redirect`  | `{ originalUrl }` or no such field        | anything                     |
//!
//! A resolved `originalUrl` that is not an absolute http(s) URL is reported as
//! a failed redirect; it would otherwise reach the opener command verbatim.

use super::client::is_web_url;
use super::request::ApiRequest;
use crate::domain::error::{Result, ZshortError};
use crate::domain::ShortenedUrlRecord;
use serde::Deserialize;

/// Body of `GET /urls`, which the backend serves in two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UrlListBody {
    /// A bare JSON array of records.
    Bare(Vec<ShortenedUrlRecord>),

    /// An envelope carrying the records and, optionally, their count.
    ///
    /// Only `urls` decides the shape; `total` is informational and accepted
    /// whatever its JSON type.
    Envelope {
        #[serde(default)]
        total: Option<serde_json::Value>,
        urls: Vec<ShortenedUrlRecord>,
    },
}

impl UrlListBody {
    /// Parses a list body. `{ "urls": null }` and any other shape are errors.
    ///
    /// # Errors
    ///
    /// Returns [`ZshortError::Decode`] if the body matches neither shape.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map_err(|_| ZshortError::Decode("expected a list of URLs or an object with a `urls` list".to_string()))
    }

    /// Normalizes either shape into the canonical record list.
    #[must_use]
    pub fn into_records(self) -> Vec<ShortenedUrlRecord> {
        match self {
            Self::Bare(records) => records,
            Self::Envelope { total, urls } => {
                if let Some(total) = total.as_ref().and_then(serde_json::Value::as_u64) {
                    if usize::try_from(total).ok() != Some(urls.len()) {
                        tracing::debug!(total = total, received = urls.len(), "envelope total differs from list length");
                    }
                }
                urls
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: ErrorMessage,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    Nested { message: String },
    Plain(String),
}

/// Extracts the backend-supplied error message from a failure body, if any.
#[must_use]
pub fn backend_error_message(body: &[u8]) -> Option<String> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).ok()?;
    let message = match envelope.message {
        ErrorMessage::Nested { message } | ErrorMessage::Plain(message) => message,
    };
    let message = message.trim();
    (!message.is_empty()).then(|| message.to_string())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RedirectBody {
    #[serde(default)]
    original_url: Option<String>,
}

/// Typed outcome of one backend operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// `GET /urls` succeeded and its body normalized to a record list.
    UrlsLoaded {
        records: Vec<ShortenedUrlRecord>,
    },

    /// `GET /urls` failed or returned an unusable body.
    UrlsFailed {
        reason: String,
    },

    /// `POST /shorten` succeeded. The created record is kept when the body
    /// decodes as one.
    Shortened {
        record: Option<ShortenedUrlRecord>,
    },

    /// `POST /shorten` failed.
    ShortenFailed {
        status: u16,
        /// Message supplied by the backend's error envelope, if present.
        message: Option<String>,
    },

    /// `GET /redirect/{code}` resolved to an original URL.
    Resolved {
        short_code: String,
        original_url: String,
    },

    /// `GET /redirect/{code}` answered without an original URL.
    NotFound {
        short_code: String,
    },

    /// `GET /redirect/{code}` could not be completed.
    RedirectFailed {
        short_code: String,
        reason: String,
    },
}

/// Returns `true` for 2xx statuses.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl ApiResponse {
    /// Decodes a host response for the operation that produced it.
    #[must_use]
    pub fn decode(request: &ApiRequest, status: u16, body: &[u8]) -> Self {
        let _span = tracing::debug_span!("decode_response", op = request.name(), status = status, body_len = body.len()).entered();

        let response = match request {
            ApiRequest::FetchUrls => Self::decode_url_list(status, body),
            ApiRequest::Shorten { .. } => Self::decode_shorten(status, body),
            ApiRequest::Redirect { short_code } => Self::decode_redirect(short_code, status, body),
        };

        tracing::debug!(response = ?response, "response decoded");
        response
    }

    fn decode_url_list(status: u16, body: &[u8]) -> Self {
        if !is_success(status) {
            return Self::UrlsFailed {
                reason: failure_reason(status, body),
            };
        }

        match UrlListBody::parse(body) {
            Ok(list) => Self::UrlsLoaded {
                records: list.into_records(),
            },
            Err(e) => Self::UrlsFailed { reason: e.to_string() },
        }
    }

    fn decode_shorten(status: u16, body: &[u8]) -> Self {
        if is_success(status) {
            return Self::Shortened {
                record: serde_json::from_slice(body).ok(),
            };
        }

        Self::ShortenFailed {
            status,
            message: backend_error_message(body),
        }
    }

    fn decode_redirect(short_code: &str, status: u16, body: &[u8]) -> Self {
        let short_code = short_code.to_string();
        let parsed = serde_json::from_slice::<RedirectBody>(body);

        match parsed {
            Ok(RedirectBody { original_url: Some(url) }) if is_success(status) && !url.trim().is_empty() => {
                // The URL becomes an argument of the opener command.
                if is_web_url(&url) {
                    Self::Resolved {
                        short_code,
                        original_url: url,
                    }
                } else {
                    tracing::warn!(short_code = %short_code, original_url = %url, "refusing to open non-http(s) URL");
                    Self::RedirectFailed {
                        short_code,
                        reason: format!("backend returned a non-http(s) URL: {url}"),
                    }
                }
            }
            Ok(_) if is_success(status) || status == 404 => Self::NotFound { short_code },
            Err(_) if status == 404 => Self::NotFound { short_code },
            _ => Self::RedirectFailed {
                short_code,
                reason: failure_reason(status, body),
            },
        }
    }
}

/// Builds a log-friendly failure description from a status and body.
fn failure_reason(status: u16, body: &[u8]) -> String {
    let detail = backend_error_message(body).unwrap_or_else(|| {
        let text = String::from_utf8_lossy(body);
        text.trim().chars().take(200).collect()
    });

    ZshortError::Http {
        status,
        message: if detail.is_empty() { "no response body".to_string() } else { detail },
    }
    .to_string()
}
