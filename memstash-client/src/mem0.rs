//! Mem0 HTTP client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::base::{ClientError, ClientResult, MemoryRecord, MemoryStore};

/// Base URL of the hosted Mem0 API
pub const DEFAULT_API_BASE: &str = "https://api.mem0.ai/v1";

/// Create-record request payload
#[derive(Debug, Serialize)]
struct CreateMemoryRequest<'a> {
    title: &'a str,
    content: &'a str,
}

/// Client for the hosted Mem0 memory-storage API
pub struct Mem0Client {
    client: Client,
    api_base: String,
    api_key: String,
}

impl Mem0Client {
    /// Create a new client.
    ///
    /// `api_base` overrides the hosted endpoint (self-hosted gateways, tests);
    /// a missing or blank override falls back to [`DEFAULT_API_BASE`].
    pub fn new(api_key: impl Into<String>, api_base: Option<String>) -> Self {
        let api_base = api_base
            .and_then(|base| {
                let trimmed = base.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.trim_end_matches('/').to_string())
                }
            })
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            client: Client::new(),
            api_base,
            api_key: api_key.into(),
        }
    }

    fn apply_headers(&self, req_builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        // Hosted Mem0 authorizes with a Token scheme rather than Bearer.
        req_builder.header("Authorization", format!("Token {}", self.api_key))
    }
}

#[async_trait]
impl MemoryStore for Mem0Client {
    async fn create_memory(&self, title: &str, content: &str) -> ClientResult<MemoryRecord> {
        let url = format!("{}/memories", self.api_base);
        let request = CreateMemoryRequest { title, content };

        debug!("Sending create request to {}", url);

        let req_builder = self.apply_headers(self.client.post(&url).json(&request));
        let response = req_builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let record: MemoryRecord = serde_json::from_str(&body)?;
        if record.id.is_empty() {
            return Err(ClientError::InvalidResponse(
                "created record has no id".to_string(),
            ));
        }
        Ok(record)
    }

    async fn list_memories(&self) -> ClientResult<Vec<MemoryRecord>> {
        let url = format!("{}/memories", self.api_base);

        debug!("Sending list request to {}", url);

        let req_builder = self.apply_headers(self.client.get(&url));
        let response = req_builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let records: Vec<MemoryRecord> = serde_json::from_str(&body)?;
        Ok(records)
    }
}
