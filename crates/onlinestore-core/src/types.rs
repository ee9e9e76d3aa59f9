//! # Domain Types
//!
//! Core domain types shared by the catalog client and the stores.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Product      │◄───────│    CartItem     │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  id (identity)  │        │  product        │                        │
//! │  │  title          │        │  quantity (≥1)  │                        │
//! │  │  price (Money)  │        └─────────────────┘                        │
//! │  │  description    │                                                    │
//! │  │  category       │                                                    │
//! │  │  image_url      │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two products with the same `id` ARE the same product, even when the rest
//! of their fields differ (a stale copy held by the cart vs. a fresh copy
//! from the catalog). `PartialEq` and `Hash` only look at `id`.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use ts_rs::TS;

use crate::money::{serde_decimal, Money};

/// Catalog identity of a product.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product offered by the catalog.
///
/// ## Wire Format
/// ```json
/// {
///   "id": 1,
///   "title": "Fjallraven - Foldsack No. 1 Backpack",
///   "price": 109.95,
///   "description": "Your perfect pack for everyday use",
///   "category": "men's clothing",
///   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Catalog identifier. The only field equality looks at.
    #[ts(type = "number")]
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Unit price (non-negative), decimal on the wire.
    #[serde(with = "serde_decimal")]
    #[ts(type = "number")]
    pub price: Money,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    /// Product image location.
    #[serde(rename = "image", alias = "imageURL", default)]
    pub image_url: String,
}

impl Product {
    /// Creates a product with empty descriptive fields.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image_url: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart: one product and how many of it.
///
/// ## Invariant
/// `quantity >= 1` for as long as the item is held by a cart. The cart
/// removes the item instead of letting it reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub product: Product,

    #[ts(type = "number")]
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    /// Identity of the product this line is for.
    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
