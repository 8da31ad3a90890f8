//! Shortened URL record as served by the backend.
//!
//! Records are created by the backend when a URL is shortened and are read-only
//! from the plugin's point of view. Only `clicks` ever changes, and only the
//! backend changes it (every resolved redirect increments it).

use serde::{Deserialize, Serialize};

/// One original-URL-to-short-code mapping with its click count.
///
/// JSON field names follow the backend's camelCase convention.
///
/// # Examples
///
/// ```
/// use zshort::ShortenedUrlRecord;
///
/// let record: ShortenedUrlRecord = serde_json::from_str(
///     r#"{"id":7,"originalUrl":"https://example.com","shortCode":"abc123","clicks":2}"#,
/// ).unwrap();
/// assert_eq!(record.short_code, "abc123");
/// assert_eq!(record.short_link("https://sho.rt"), "https://sho.rt/redirect/abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedUrlRecord {
    /// Backend-assigned unique identifier.
    pub id: i64,
    /// The URL the short code resolves to.
    pub original_url: String,
    /// Backend-assigned unique short code.
    pub short_code: String,
    /// Number of resolved redirects, maintained by the backend.
    #[serde(default)]
    pub clicks: u64,
}

impl ShortenedUrlRecord {
    /// Returns the public short link for this record under the given API base.
    ///
    /// The link points at the backend's redirect endpoint, which is what the
    /// user would share.
    #[must_use]
    pub fn short_link(&self, api_base: &str) -> String {
        format!("{}/redirect/{}", api_base.trim_end_matches('/'), self.short_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_default_to_zero_when_missing() {
        let record: ShortenedUrlRecord = serde_json::from_str(
            r#"{"id":1,"originalUrl":"https://a.example","shortCode":"a1"}"#,
        )
        .unwrap();
        assert_eq!(record.clicks, 0);
    }

    #[test]
    fn short_link_ignores_trailing_slash_on_base() {
        let record = ShortenedUrlRecord {
            id: 1,
            original_url: "https://a.example".into(),
            short_code: "xyz".into(),
            clicks: 0,
        };
        assert_eq!(record.short_link("http://localhost:3000/"), "http://localhost:3000/redirect/xyz");
    }

    #[test]
    fn negative_clicks_are_rejected() {
        let result = serde_json::from_str::<ShortenedUrlRecord>(
            r#"{"id":1,"originalUrl":"https://a.example","shortCode":"a1","clicks":-3}"#,
        );
        assert!(result.is_err());
    }
}
