//! # Product Store
//!
//! Fetches the catalog through an [`ApiClient`] and exposes a
//! [`LoadingState`] the listing screen renders from.
//!
//! ## State Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Loading State Machine                                │
//! │                                                                         │
//! │  ┌────────────┐   fetch_products()   ┌─────────────┐                    │
//! │  │ NOTSTARTED │ ───────────────────▶ │   LOADING   │ ◀──────────────┐   │
//! │  └────────────┘    (set on call)     └──────┬──────┘                │   │
//! │                                             │                       │   │
//! │                 ┌───────────────────────────┼───────────────┐       │   │
//! │                 │ Ok(non-empty)             │ Ok([])        │ Err   │   │
//! │                 ▼                           ▼               ▼       │   │
//! │          ┌─────────────┐            ┌─────────────┐  ┌───────────┐  │   │
//! │          │   LOADED    │            │    EMPTY    │  │   ERROR   │  │   │
//! │          │ (products)  │            │             │  │ (message) │  │   │
//! │          └──────┬──────┘            └──────┬──────┘  └─────┬─────┘  │   │
//! │                 │                          │               │        │   │
//! │                 └──────────────────────────┴───────────────┴────────┘   │
//! │                               fetch_products() again                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overlapping Fetches
//! A fetch started while another is in flight is not cancelled. Both
//! terminal writes land in resolution order, so the fetch that resolves last
//! decides the final state. Each fetch carries a sequence number; a fetch
//! that resolves after a newer one started is logged at `warn` level.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use onlinestore_client::ApiClient;
use onlinestore_core::{Product, ProductId};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::observer::{LoadingStateObserver, NoOpObserver};

// =============================================================================
// Loading State
// =============================================================================

/// Lifecycle of a catalog fetch, as the listing screen sees it.
///
/// ## Wire Format
/// ```json
/// { "status": "loaded", "products": [ ... ] }
/// { "status": "error", "message": "The catalog request timed out" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum LoadingState {
    /// No fetch has been started.
    #[default]
    NotStarted,
    /// A fetch is in flight.
    Loading,
    /// The last fetch returned at least one product.
    Loaded { products: Vec<Product> },
    /// The last fetch succeeded with no products.
    Empty,
    /// The last fetch failed.
    Error { message: String },
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    /// True once a fetch has resolved, either way.
    pub fn is_settled(&self) -> bool {
        match self {
            LoadingState::NotStarted | LoadingState::Loading => false,
            LoadingState::Loaded { .. } | LoadingState::Empty | LoadingState::Error { .. } => true,
        }
    }

    /// Products carried by `Loaded`.
    pub fn products(&self) -> Option<&[Product]> {
        match self {
            LoadingState::Loaded { products } => Some(products),
            _ => None,
        }
    }

    /// Message carried by `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadingState::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoadingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadingState::NotStarted => write!(f, "not_started"),
            LoadingState::Loading => write!(f, "loading"),
            LoadingState::Loaded { products } => write!(f, "loaded ({} products)", products.len()),
            LoadingState::Empty => write!(f, "empty"),
            LoadingState::Error { message } => write!(f, "error: {}", message),
        }
    }
}

// =============================================================================
// Product Store
// =============================================================================

/// Last successfully fetched catalog.
#[derive(Debug, Default)]
struct Catalog {
    products: Vec<Product>,
    fetched_at: Option<DateTime<Utc>>,
}

/// Catalog fetcher and loading state holder.
///
/// Share it behind an `Arc` when fetches are spawned onto other tasks.
pub struct ProductStore {
    /// Catalog source.
    api: Arc<dyn ApiClient>,
    /// Host hook, called for every transition.
    observer: Arc<dyn LoadingStateObserver>,
    /// Current state.
    state_tx: watch::Sender<LoadingState>,
    /// Held across a state write and its observer call.
    transition_lock: Mutex<()>,
    /// Private copy of the last fetched products.
    catalog: RwLock<Catalog>,
    /// Sequence number of the most recently started fetch.
    fetch_seq: AtomicU64,
}

impl ProductStore {
    /// Creates a store in `NotStarted` with no observer.
    pub fn new(api: Arc<dyn ApiClient>) -> Self {
        let (state_tx, _) = watch::channel(LoadingState::NotStarted);
        ProductStore {
            api,
            observer: Arc::new(NoOpObserver),
            state_tx,
            transition_lock: Mutex::new(()),
            catalog: RwLock::new(Catalog::default()),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Sets the observer notified on every transition.
    ///
    /// The observer runs after the state is published, so it may read the
    /// store (`loading_state`, `products`, `product`). It must not call
    /// `fetch_products` on the same store: transitions are serialized and
    /// that call would block on the one being delivered.
    pub fn with_observer(mut self, observer: Arc<dyn LoadingStateObserver>) -> Self {
        self.observer = observer;
        self
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetches the catalog and moves the state to its outcome.
    ///
    /// The state becomes `Loading` when this method is called, before the
    /// returned future is first polled. The future never fails: a fetch
    /// error ends up in `LoadingState::Error`.
    ///
    /// ## Example
    /// ```rust
    /// use std::sync::Arc;
    /// use onlinestore_client::StubApiClient;
    /// use onlinestore_state::{LoadingState, ProductStore};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let store = ProductStore::new(Arc::new(StubApiClient::empty()));
    ///
    /// let fetch = store.fetch_products();
    /// assert!(store.loading_state().is_loading());
    ///
    /// fetch.await;
    /// assert_eq!(store.loading_state(), LoadingState::Empty);
    /// # }
    /// ```
    pub fn fetch_products(&self) -> impl Future<Output = ()> + Send + '_ {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        info!(seq, "Fetching products");
        self.transition(LoadingState::Loading, None);

        async move {
            let result = self.api.fetch_products().await;

            let latest = self.fetch_seq.load(Ordering::SeqCst);
            if latest != seq {
                warn!(seq, latest, "Stale catalog fetch resolved after a newer one started");
            }

            match result {
                Ok(products) => {
                    info!(seq, count = products.len(), "Products fetched");
                    let next = if products.is_empty() {
                        LoadingState::Empty
                    } else {
                        LoadingState::Loaded {
                            products: products.clone(),
                        }
                    };
                    self.transition(next, Some(products));
                }
                Err(e) => {
                    warn!(seq, error = %e, retryable = e.is_retryable(), "Product fetch failed");
                    self.transition(
                        LoadingState::Error {
                            message: e.to_string(),
                        },
                        None,
                    );
                }
            }
        }
    }

    /// Applies one transition: catalog, state slot, observer, in that order.
    ///
    /// The observer is called with the watch slot unlocked; `transition_lock`
    /// keeps notifications in the same order as the writes.
    fn transition(&self, next: LoadingState, fetched: Option<Vec<Product>>) {
        let _ordered = self
            .transition_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut published = None;
        self.state_tx.send_modify(|state| {
            if let Some(products) = fetched {
                let mut catalog = self.catalog_mut();
                catalog.products = products;
                catalog.fetched_at = Some(Utc::now());
            }

            debug!(from = %state, to = %next, "Loading state transition");
            *state = next;
            published = Some(state.clone());
        });

        if let Some(state) = published {
            self.observer.on_state_change(&state);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of the current state.
    pub fn loading_state(&self) -> LoadingState {
        self.state_tx.borrow().clone()
    }

    /// Receiver that always holds the latest state.
    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.state_tx.subscribe()
    }

    /// Products from the last successful fetch.
    ///
    /// Survives a later failed fetch; replaced (possibly by nothing) on the
    /// next successful one.
    pub fn products(&self) -> Vec<Product> {
        self.catalog().products.clone()
    }

    /// Looks up one product from the last successful fetch.
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.catalog().products.iter().find(|p| p.id == id).cloned()
    }

    /// When the last successful fetch resolved.
    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.catalog().fetched_at
    }

    fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
