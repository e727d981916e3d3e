pub mod elastic;
pub mod models;
pub mod store_size;

#[cfg(test)]
mod store_size_test;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use elastic::ElasticGateway;
pub use models::{CollectionSummary, DocumentRecord, Health, IndexStatus, SearchPage};
pub use store_size::{human_bytes, parse_store_size};

/// Page size used when the caller asks for a non-positive one
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{operation}: {body}")]
    Backend { operation: String, body: String },

    #[error("{0}")]
    Validation(String),

    #[error("decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Backend operations the browser needs from a document store.
///
/// Implementations are shared across concurrently running commands, so they
/// must not hold mutable client-side state.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn list_collections(&self) -> Result<Vec<CollectionSummary>, GatewayError>;

    async fn search_page(
        &self,
        collection: &str,
        query: &str,
        page_size: usize,
    ) -> Result<SearchPage, GatewayError>;

    /// Index `body` and return the id the backend assigned. A blank `id` asks
    /// the backend to generate one.
    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        body: &str,
    ) -> Result<String, GatewayError>;

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), GatewayError>;

    /// Make recent writes visible to search.
    async fn refresh_index(&self, collection: &str) -> Result<(), GatewayError>;

    async fn list_field_names(&self, collection: &str) -> Result<Vec<String>, GatewayError>;
}
