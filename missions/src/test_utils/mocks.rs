//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record every call so tests can verify what reached the network.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::JsonSource;
use crate::error::FetchError;

// ============================================================================
// Mock JSON Source
// ============================================================================

/// Canned responses keyed by exact URL. Unknown URLs answer `HTTP 404`.
#[derive(Default)]
pub struct MockJsonSource {
    responses: Arc<RwLock<HashMap<String, Result<Value, FetchError>>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockJsonSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a successful body
    pub fn respond(&self, url: &str, body: Value) {
        self.responses
            .write()
            .unwrap()
            .insert(url.to_string(), Ok(body));
    }

    /// Answer `url` with a failure
    pub fn fail(&self, url: &str, error: FetchError) {
        self.responses
            .write()
            .unwrap()
            .insert(url.to_string(), Err(error));
    }

    /// URLs requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl JsonSource for MockJsonSource {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.write().unwrap().push(url.to_string());

        self.responses
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Http { status: 404 }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_url_is_not_found() {
        let source = MockJsonSource::new();

        let err = source.get_json("http://nowhere.test/").await.unwrap_err();

        assert_eq!(err, FetchError::Http { status: 404 });
        assert_eq!(source.calls(), vec!["http://nowhere.test/"]);
    }

    #[tokio::test]
    async fn canned_body_is_returned() {
        let source = MockJsonSource::new();
        source.respond("http://a.test/", serde_json::json!({"ok": true}));

        let value = source.get_json("http://a.test/").await.unwrap();

        assert_eq!(value, serde_json::json!({"ok": true}));
    }
}
