//! reqwest-backed JSON fetch helper

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::domain::ports::JsonSource;
use crate::error::FetchError;

/// Implementation of the JSON fetch helper over HTTP
#[derive(Clone)]
pub struct HttpJsonClient {
    http: Client,
}

impl HttpJsonClient {
    /// Create a client that identifies itself with `user_agent`
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self { http })
    }

    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        Self::new(&config.user_agent)
    }
}

#[async_trait]
impl JsonSource for HttpJsonClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
