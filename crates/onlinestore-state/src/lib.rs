//! # onlinestore-state: Cart and Product Stores
//!
//! The observable state behind the product listing and cart screens.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Layer                                      │
//! │                                                                         │
//! │  ┌───────────────────────────┐      ┌───────────────────────────────┐  │
//! │  │        CartStore          │      │        ProductStore           │  │
//! │  │  ───────────────────────  │      │  ───────────────────────────  │  │
//! │  │  Vec<CartItem>            │      │  watch<LoadingState>          │  │
//! │  │  CurrencyFormat           │      │  last catalog + fetched_at    │  │
//! │  │                           │      │  Arc<dyn ApiClient>           │  │
//! │  │  sync, never fails        │      │  async fetch, never fails     │  │
//! │  └─────────────┬─────────────┘      └───────────────┬───────────────┘  │
//! │                │ &mut self                          │ observer / rx    │
//! │                ▼                                    ▼                   │
//! │  ┌─────────────────────────┐        ┌───────────────────────────────┐  │
//! │  │ SharedCartStore         │        │ LoadingStateObserver          │  │
//! │  │ (Arc<Mutex>, optional)  │        │ (host's rendering context)    │  │
//! │  └─────────────────────────┘        └───────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two stores are independent: the cart never asks the product store
//! for anything.
//!
//! ## Modules
//! - [`cart`] - `CartStore` and `SharedCartStore`
//! - [`product`] - `ProductStore` and `LoadingState`
//! - [`observer`] - Transition observer trait
//!
//! ## Example
//! ```rust
//! use onlinestore_core::{Money, Product};
//! use onlinestore_state::CartStore;
//!
//! let backpack = Product::new(1, "Backpack", Money::from_cents(10995));
//!
//! let mut cart = CartStore::new();
//! cart.add_to_cart(&backpack);
//! cart.add_to_cart(&backpack);
//!
//! assert_eq!(cart.quantity(&backpack), 2);
//! assert_eq!(cart.total_price_string(), "$219.90");
//! ```

pub mod cart;
pub mod observer;
pub mod product;

pub use cart::{CartStore, SharedCartStore};
pub use observer::{LoadingStateObserver, NoOpObserver};
pub use product::{LoadingState, ProductStore};
