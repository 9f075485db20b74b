//! Product search port
//!
//! Defines the interface for translating a product/service suggestion into
//! one concrete shopping listing.

use adchat_domain::ProductRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a shopping search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Shopping-search provider.
///
/// `Ok(None)` means the provider answered but had no usable listing (no
/// entries, or no entry with a link). Transport and payload failures are
/// reported as errors; the orchestrator degrades them to "no product".
#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Return the first usable listing for a free-text query.
    async fn find_first(&self, query: &str) -> Result<Option<ProductRecord>, SearchError>;
}
