//! # onlinestore-client: Catalog API Collaborator
//!
//! Everything the stores need from the outside world, behind one trait.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ApiClient Seam                                   │
//! │                                                                         │
//! │                  ┌──────────────────────────────┐                       │
//! │                  │   ProductStore (state crate) │                       │
//! │                  └──────────────┬───────────────┘                       │
//! │                                 │ Arc<dyn ApiClient>                    │
//! │         ┌───────────────────────┼───────────────────────┐              │
//! │         ▼                       ▼                       ▼               │
//! │  ┌────────────────┐  ┌────────────────────┐  ┌────────────────────┐    │
//! │  │ LiveApiClient  │  │  StubApiClient     │  │ ScriptedApiClient  │    │
//! │  │                │  │                    │  │                    │    │
//! │  │ GET /products  │  │ success / empty /  │  │ queued responses   │    │
//! │  │ via reqwest    │  │ failure            │  │ with per-call delay│    │
//! │  └────────────────┘  └────────────────────┘  └────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`api`] - The `ApiClient` trait
//! - [`config`] - Base URL, timeout, user agent
//! - [`doubles`] - Deterministic test doubles
//! - [`error`] - Client error types
//! - [`live`] - reqwest implementation
//!
//! ## Usage
//! ```rust,no_run
//! use onlinestore_client::{ApiClient, ClientConfig, LiveApiClient};
//!
//! # async fn run() -> Result<(), onlinestore_client::ClientError> {
//! let client = LiveApiClient::new(ClientConfig::default())?;
//! let products = client.fetch_products().await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod doubles;
pub mod error;
pub mod live;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use doubles::{sample_products, ScriptedApiClient, StubApiClient, StubBehavior};
pub use error::{ClientError, ClientResult};
pub use live::LiveApiClient;
