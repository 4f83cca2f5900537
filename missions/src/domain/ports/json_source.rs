//! JSON source port trait
//!
//! The contract of the JSON fetch helper: one GET, a status check, and a
//! parsed body or an explicit failure.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

/// Port trait for fetching JSON documents
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Issue a single GET against `url` and return the parsed body
    ///
    /// - 2xx: the body parsed as JSON, unchanged
    /// - any other status: `FetchError::Http` without touching the body
    /// - request could not complete: `FetchError::Transport`
    /// - malformed 2xx body: `FetchError::Parse`
    ///
    /// No retries, no caching, no URL validation.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Convert a fetched document into a typed view
///
/// Returns the serde message on mismatch so callers can map it into their
/// own error type.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Post;

    #[test]
    fn decode_typed_view() {
        let value = serde_json::json!([{"id": 1, "title": "a"}, {"id": 2, "title": "b"}]);
        let posts: Vec<Post> = decode(value).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].title, "b");
    }

    #[test]
    fn decode_reports_missing_field() {
        let value = serde_json::json!({"id": 1});
        let err = decode::<Post>(value).unwrap_err();
        assert!(err.contains("title"));
    }
}
