//! Request builder bound to one configured backend.

use super::request::{ApiRequest, HttpMethod, HttpRequest, RequestContext};
use crate::domain::error::{Result, ZshortError};
use std::collections::BTreeMap;
use url::Url;

/// Builds [`HttpRequest`]s for a backend base URL and optional API key.
///
/// # Examples
///
/// ```
/// use zshort::api::{ApiClient, ApiRequest, HttpMethod};
///
/// let client = ApiClient::new("https://sho.rt/api/", Some("secret".into()))?;
/// let request = client.build(&ApiRequest::FetchUrls)?;
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.url, "https://sho.rt/api/urls");
/// assert_eq!(request.headers["Authorization"], "Bearer secret");
/// # Ok::<(), zshort::ZshortError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: Url,
    api_key: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ZshortError::Config`] if the URL does not parse or is not an
    /// `http`/`https` URL.
    pub fn new(api_url: &str, api_key: Option<String>) -> Result<Self> {
        let base = Url::parse(api_url.trim())
            .map_err(|e| ZshortError::Config(format!("invalid api_url {api_url:?}: {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ZshortError::Config(format!(
                "api_url must use http or https, got {:?}",
                base.scheme()
            )));
        }

        Ok(Self {
            base,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    /// Base URL as displayed to the user, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// Builds the HTTP request for an operation.
    ///
    /// The current trace context is captured into the request's context map.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be extended or the body or context
    /// cannot be serialized.
    pub fn build(&self, request: &ApiRequest) -> Result<HttpRequest> {
        let _span = tracing::debug_span!("build_request", op = request.name()).entered();

        let mut headers = BTreeMap::new();
        if let Some(key) = &self.api_key {
            headers.insert("Authorization".to_string(), format!("Bearer {key}"));
        }

        let (method, url, body) = match request {
            ApiRequest::FetchUrls => (HttpMethod::Get, self.endpoint(&["urls"])?, Vec::new()),
            ApiRequest::Shorten { url } => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                let body = serde_json::to_vec(&serde_json::json!({ "url": url }))?;
                (HttpMethod::Post, self.endpoint(&["shorten"])?, body)
            }
            ApiRequest::Redirect { short_code } => (
                HttpMethod::Get,
                self.endpoint(&["redirect", short_code.as_str()])?,
                Vec::new(),
            ),
        };

        let context = RequestContext::capture(request.clone()).to_map()?;

        tracing::debug!(method = ?method, url = %url, body_len = body.len(), "request built");

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
            context,
        })
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<String> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ZshortError::Config(format!("api_url {} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }
}

/// Returns `true` for an absolute `http`/`https` URL with a host.
///
/// Guards both what the user submits and what the backend hands back for the
/// opener, which receives the URL as a command argument.
///
/// ```
/// use zshort::api::is_web_url;
///
/// assert!(is_web_url("https://example.com/path?q=1"));
/// assert!(!is_web_url("example.com"));
/// assert!(!is_web_url("--help"));
/// assert!(!is_web_url("ftp://files.example"));
/// ```
#[must_use]
pub fn is_web_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::CONTEXT_REQUEST_KEY;

    fn client(key: Option<&str>) -> ApiClient {
        ApiClient::new("http://localhost:3000", key.map(String::from)).unwrap()
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(matches!(ApiClient::new("ftp://host", None), Err(ZshortError::Config(_))));
        assert!(matches!(ApiClient::new("not a url", None), Err(ZshortError::Config(_))));
    }

    #[test]
    fn omits_authorization_without_key() {
        let request = client(None).build(&ApiRequest::FetchUrls).unwrap();
        assert!(!request.headers.contains_key("Authorization"));

        let request = client(Some("  ")).build(&ApiRequest::FetchUrls).unwrap();
        assert!(!request.headers.contains_key("Authorization"));
    }

    #[test]
    fn shorten_posts_json_body() {
        let request = client(Some("k"))
            .build(&ApiRequest::Shorten { url: "https://example.com/a?b=c".into() })
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "http://localhost:3000/shorten");
        assert_eq!(request.headers["Content-Type"], "application/json");
        assert_eq!(request.headers["Authorization"], "Bearer k");

        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({ "url": "https://example.com/a?b=c" }));
    }

    #[test]
    fn redirect_encodes_short_code_as_one_segment() {
        let request = client(None)
            .build(&ApiRequest::Redirect { short_code: "a/b c".into() })
            .unwrap();
        assert_eq!(request.url, "http://localhost:3000/redirect/a%2Fb%20c");
        assert!(request.body.is_empty());
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = ApiClient::new("https://host/v1/", None).unwrap();
        assert_eq!(client.base_url(), "https://host/v1");
        let request = client.build(&ApiRequest::FetchUrls).unwrap();
        assert_eq!(request.url, "https://host/v1/urls");
    }

    #[test]
    fn context_identifies_the_operation() {
        let request = client(None).build(&ApiRequest::FetchUrls).unwrap();
        assert!(request.context.contains_key(CONTEXT_REQUEST_KEY));
        let restored = RequestContext::from_map(&request.context).unwrap();
        assert_eq!(restored.request, ApiRequest::FetchUrls);
    }
}
