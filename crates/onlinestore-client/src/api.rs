//! # ApiClient Trait
//!
//! The collaborator interface `onlinestore_state::ProductStore` consumes.
//!
//! ## Contract
//! - `fetch_products` may suspend (network round trip) and may fail
//! - A failure is a [`ClientError`](crate::ClientError) whose `Display` text is fit to show a
//!   user; the store renders it verbatim into its error state
//! - Timeouts are the implementation's concern, not the caller's

use async_trait::async_trait;
use onlinestore_core::Product;

use crate::error::ClientResult;

/// Source of the product catalog.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Fetches the full product catalog.
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;
}
