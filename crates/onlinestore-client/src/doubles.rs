//! # Deterministic Catalog Doubles
//!
//! In-process [`ApiClient`] implementations for tests and offline runs.
//!
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────────┐
//! │ StubApiClient        │ same answer on every call, optional latency  │
//! │ ScriptedApiClient    │ queued answers, one per call, each delayed   │
//! └──────────────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! Latency uses `tokio::time::sleep`, so tests running under
//! `#[tokio::test(start_paused = true)]` control ordering exactly.

use async_trait::async_trait;
use onlinestore_core::{Money, Product};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Message carried by every failing double.
pub const STUB_FAILURE_MESSAGE: &str = "stub catalog is offline";

/// Three fixed products.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Fjallraven Foldsack Backpack", Money::from_cents(10995))
            .with_category("men's clothing")
            .with_description("Your perfect pack for everyday use and walks in the forest.")
            .with_image_url("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"),
        Product::new(2, "Mens Casual Premium Slim Fit T-Shirts", Money::from_cents(2230))
            .with_category("men's clothing")
            .with_image_url("https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg"),
        Product::new(3, "Mens Cotton Jacket", Money::from_cents(5599))
            .with_category("men's clothing")
            .with_image_url("https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg"),
    ]
}

// =============================================================================
// StubApiClient
// =============================================================================

/// What a [`StubApiClient`] answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubBehavior {
    /// Succeed with this payload.
    Success(Vec<Product>),
    /// Succeed with no products.
    Empty,
    /// Fail with [`ClientError::Unavailable`].
    Failure,
}

impl StubBehavior {
    fn respond(&self) -> ClientResult<Vec<Product>> {
        match self {
            StubBehavior::Success(products) => Ok(products.clone()),
            StubBehavior::Empty => Ok(Vec::new()),
            StubBehavior::Failure => Err(ClientError::Unavailable(STUB_FAILURE_MESSAGE.into())),
        }
    }
}

/// Answers every call the same way.
#[derive(Debug, Clone)]
pub struct StubApiClient {
    behavior: StubBehavior,
    delay: Option<Duration>,
}

impl StubApiClient {
    pub fn new(behavior: StubBehavior) -> Self {
        StubApiClient {
            behavior,
            delay: None,
        }
    }

    /// Succeeds with [`sample_products`].
    pub fn success() -> Self {
        Self::new(StubBehavior::Success(sample_products()))
    }

    /// Succeeds with an empty catalog.
    pub fn empty() -> Self {
        Self::new(StubBehavior::Empty)
    }

    /// Always fails.
    pub fn failure() -> Self {
        Self::new(StubBehavior::Failure)
    }

    /// Succeeds with the given payload.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self::new(StubBehavior::Success(products))
    }

    /// Sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn behavior(&self) -> &StubBehavior {
        &self.behavior
    }
}

#[async_trait]
impl ApiClient for StubApiClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.behavior.respond()
    }
}

// =============================================================================
// ScriptedApiClient
// =============================================================================

/// Returns queued responses in call order, each after its own delay.
///
/// A call made after the queue is drained fails with
/// [`ClientError::Unavailable`].
///
/// ## Example
/// ```text
/// call 1 ──► sleep 50ms ──► Ok(sample)     (resolves second)
/// call 2 ──► sleep 10ms ──► Err(offline)   (resolves first)
/// ```
#[derive(Debug, Default)]
pub struct ScriptedApiClient {
    script: Mutex<VecDeque<(Duration, StubBehavior)>>,
}

impl ScriptedApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response delivered `delay` after the call that takes it.
    pub fn then(self, delay: Duration, behavior: StubBehavior) -> Self {
        self.push(delay, behavior);
        self
    }

    /// Queues a response on a shared client.
    pub fn push(&self, delay: Duration, behavior: StubBehavior) {
        let mut script = match self.script.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        script.push_back((delay, behavior));
    }

    /// Number of responses not yet taken.
    pub fn remaining(&self) -> usize {
        match self.script.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    fn next(&self) -> Option<(Duration, StubBehavior)> {
        let mut script = match self.script.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        script.pop_front()
    }
}

#[async_trait]
impl ApiClient for ScriptedApiClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        // Taken before sleeping so call order, not completion order, picks the response.
        let Some((delay, behavior)) = self.next() else {
            debug!("Scripted catalog exhausted");
            return Err(ClientError::Unavailable("no scripted response left".into()));
        };

        tokio::time::sleep(delay).await;
        behavior.respond()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_sample_products() {
        let products = sample_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].price, Money::from_cents(10995));

        for product in &products {
            assert!(onlinestore_core::validation::validate_product(product).is_ok());
            assert!(onlinestore_core::validation::product_warnings(product).is_empty());
        }
    }

    #[tokio::test]
    async fn test_stub_behaviors() {
        assert_eq!(StubApiClient::success().fetch_products().await.unwrap().len(), 3);
        assert!(StubApiClient::empty().fetch_products().await.unwrap().is_empty());

        let err = StubApiClient::failure().fetch_products().await.unwrap_err();
        assert!(matches!(err, ClientError::Unavailable(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stub_delay() {
        let client = StubApiClient::empty().with_delay(Duration::from_secs(3));
        let start = tokio::time::Instant::now();

        client.fetch_products().await.unwrap();

        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_responses_follow_call_order() {
        let client = Arc::new(
            ScriptedApiClient::new()
                .then(Duration::from_millis(50), StubBehavior::Success(sample_products()))
                .then(Duration::from_millis(10), StubBehavior::Failure),
        );

        let slow = tokio::spawn({
            let client = Arc::clone(&client);
            async move { client.fetch_products().await }
        });
        tokio::task::yield_now().await;
        let fast = client.fetch_products().await;

        assert!(fast.is_err());
        assert_eq!(slow.await.unwrap().unwrap().len(), 3);
        assert_eq!(client.remaining(), 0);
    }

    #[tokio::test]
    async fn test_scripted_exhausted() {
        let client = ScriptedApiClient::new();
        let err = client.fetch_products().await.unwrap_err();
        assert!(matches!(err, ClientError::Unavailable(_)));
    }
}
