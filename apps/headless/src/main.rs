//! # Online Store Headless Runner
//!
//! Fetches the catalog once, fills a cart from it and prints both screens
//! as plain text.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Runner Startup                                    │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info,onlinestore=debug, override with RUST_LOG           │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • CONFIG_PATH argument (must exist), else the platform config dir   │
//! │     • ONLINESTORE_* environment overrides                               │
//! │                                                                         │
//! │  3. Build Catalog Client ─────────────────────────────────────────────► │
//! │     • LiveApiClient, or the sample stub with --offline                  │
//! │                                                                         │
//! │  4. Fetch & Render ───────────────────────────────────────────────────► │
//! │     • ProductStore::fetch_products()                                    │
//! │     • Listing, then a cart holding the first three products             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! onlinestore-headless [--offline] [CONFIG_PATH]
//! ```

mod cli;
mod config;
mod render;

use std::sync::Arc;

use clap::Parser;
use onlinestore_client::{ApiClient, LiveApiClient, StubApiClient};
use onlinestore_state::{CartStore, ProductStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::render::{render_cart, render_listing, LoggingObserver};

/// Products put in the demo cart.
const CART_SAMPLE_SIZE: usize = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing();

    info!("Starting online store headless runner");

    // Only the default location falls back to built-in settings.
    let config = match cli.config {
        Some(path) => AppConfig::load(Some(path))?,
        None => AppConfig::load_or_default(None),
    };

    let api: Arc<dyn ApiClient> = if cli.offline {
        info!("Using the offline sample catalog");
        Arc::new(StubApiClient::success())
    } else {
        let client = LiveApiClient::new(config.api.clone())?;
        info!(url = %client.products_url(), "Catalog client ready");
        Arc::new(client)
    };

    let store = ProductStore::new(api).with_observer(Arc::new(LoggingObserver));
    store.fetch_products().await;

    let state = store.loading_state();
    println!("{}\n", render_listing(&state, &config.currency));

    let mut cart = CartStore::new().with_currency_format(config.currency.clone());
    for product in state.products().unwrap_or_default().iter().take(CART_SAMPLE_SIZE) {
        cart.add_to_cart(product);
    }
    println!("{}", render_cart(&cart));

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=onlinestore_state=trace` - Trace the stores only
/// - Default: `info,onlinestore=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,onlinestore=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
