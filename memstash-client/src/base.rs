//! Base trait and types for memory-storage backends

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("API error: {0}")]
    ApiError(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// A record persisted by the remote memory-storage service.
///
/// The id is assigned by the service on creation; nothing in this workspace
/// produces one locally. The service owns the record; this struct is a
/// transient copy for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation timestamp, when the service includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Trait for memory-storage backends
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Store a new record and return it with its server-assigned id
    async fn create_memory(&self, title: &str, content: &str) -> ClientResult<MemoryRecord>;

    /// Retrieve every record owned by the credential's account
    async fn list_memories(&self) -> ClientResult<Vec<MemoryRecord>>;
}
