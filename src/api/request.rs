//! Backend operations and the HTTP requests that carry them.
//!
//! An [`ApiRequest`] names one backend operation. The event handler emits them
//! inside [`Action::Send`](crate::app::Action::Send); the plugin runtime turns
//! each into an [`HttpRequest`] through [`ApiClient`](super::ApiClient) and
//! hands it to Zellij's `web_request` host call.
//!
//! Zellij answers every `web_request` with a `WebRequestResult` event that only
//! carries status, headers, body and the context map given at request time. The
//! originating operation is therefore serialized into that context map
//! ([`RequestContext`]) so the response can be decoded against it.

use crate::domain::error::{Result, ZshortError};
use crate::observability::TraceContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Context map key holding the JSON-serialized [`ApiRequest`].
pub const CONTEXT_REQUEST_KEY: &str = "zshort.request";

/// One operation against the shortener backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ApiRequest {
    /// `GET /urls`: load every shortened URL record.
    FetchUrls,

    /// `POST /shorten`: ask the backend to shorten a URL.
    Shorten {
        /// The URL to shorten, already trimmed.
        url: String,
    },

    /// `GET /redirect/{short_code}`: resolve a short code and count a click.
    Redirect {
        /// Short code to resolve.
        short_code: String,
    },
}

impl ApiRequest {
    /// Short operation name used in logs and span fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FetchUrls => "fetch_urls",
            Self::Shorten { .. } => "shorten",
            Self::Redirect { .. } => "redirect",
        }
    }
}

/// HTTP method subset used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// A fully built HTTP request, ready for the host's `web_request` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
    /// Opaque map echoed back by the host in `WebRequestResult`.
    pub context: BTreeMap<String, String>,
}

/// The part of a request that travels through the host and comes back with
/// its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Operation that produced the request.
    pub request: ApiRequest,
    /// Trace context of the span that issued the request, if tracing is active.
    pub trace: Option<TraceContext>,
}

impl RequestContext {
    /// Captures the current trace context alongside the request.
    #[must_use]
    pub fn capture(request: ApiRequest) -> Self {
        Self {
            request,
            trace: TraceContext::from_current(),
        }
    }

    /// Serializes the context into the string map Zellij echoes back.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be serialized.
    pub fn to_map(&self) -> Result<BTreeMap<String, String>> {
        let mut map = BTreeMap::new();
        map.insert(CONTEXT_REQUEST_KEY.to_string(), serde_json::to_string(&self.request)?);
        if let Some(trace) = &self.trace {
            trace.write_to(&mut map);
        }
        Ok(map)
    }

    /// Restores the context from a `WebRequestResult` context map.
    ///
    /// # Errors
    ///
    /// Returns [`ZshortError::Decode`] if the map was not produced by
    /// [`to_map`](Self::to_map).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let raw = map
            .get(CONTEXT_REQUEST_KEY)
            .ok_or_else(|| ZshortError::Decode("response context carries no request".to_string()))?;
        let request = serde_json::from_str(raw)?;

        Ok(Self {
            request,
            trace: TraceContext::read_from(map),
        })
    }

    /// Span for handling this request's response.
    ///
    /// The span is detached from whatever `tracing` span is current and joins
    /// the trace that issued the request instead, when one was captured.
    #[must_use]
    pub fn response_span(&self, status: u16) -> tracing::Span {
        let span = tracing::debug_span!(parent: None, "handle_response", op = self.request.name(), status);
        if let Some(trace) = &self.trace {
            if !trace.adopt(&span) {
                tracing::debug!(trace_id = %trace.trace_id, "ignoring malformed trace context");
            }
        }
        span
    }
}
