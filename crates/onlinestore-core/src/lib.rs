//! # onlinestore-core: Pure Domain Logic for the Online Store
//!
//! This crate holds the domain vocabulary shared by the catalog client and
//! the state stores. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Online Store Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (host UI)                       │   │
//! │  │        Product List ──► Product Detail ──► Cart Screen          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ observes                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              onlinestore-state (CartStore, ProductStore)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ onlinestore-core (THIS CRATE) ★                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  currency  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Currency  │  │   rules   │  │   │
//! │  │   │  CartItem │  │           │  │  Format    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem)
//! - [`money`] - Money type with integer arithmetic
//! - [`currency`] - Currency string rendering
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog ingest rules
//!
//! ## Example Usage
//!
//! ```rust
//! use onlinestore_core::{CurrencyFormat, Money};
//!
//! let line = Money::from_cents(12312) * 3_i64; // 3 × $123.12
//! assert_eq!(CurrencyFormat::default().format(line), "$369.36");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::CurrencyFormat;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;
