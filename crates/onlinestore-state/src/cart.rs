//! # Cart Store
//!
//! The cart screen's state: an ordered list of line items plus derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  User Action              Store Method              Cart Change         │
//! │  ───────────              ────────────              ───────────         │
//! │                                                                         │
//! │  Tap "Add" ─────────────► add_to_cart() ──────────► qty += 1 or push   │
//! │                                                                         │
//! │  Tap "−" ───────────────► remove_from_cart() ─────► qty -= 1, drop at 0│
//! │                                                                         │
//! │  Swipe to delete ───────► remove_all_from_cart() ─► items.remove(i)    │
//! │                                                                         │
//! │  Tap "Clear" ───────────► remove_all_items() ─────► items.clear()      │
//! │                                                                         │
//! │  Render ────────────────► total_price_string() ───► (read only)        │
//! │                                                                         │
//! │  NOTE: Every operation is total. A product that is not in the cart     │
//! │        is a no-op for removals and a 0 for quantity().                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one item per product id
//! - Every held item has `quantity >= 1`
//! - Insertion order is kept; removals leave the remaining order stable

use std::sync::{Arc, Mutex, MutexGuard};

use onlinestore_core::{CartItem, CurrencyFormat, Money, Product, ProductId};
use tracing::debug;

/// In-memory cart for one session.
///
/// Mutations take `&mut self`, so a single owner drives the cart. Hosts that
/// touch the cart from several threads wrap it in [`SharedCartStore`].
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    currency: CurrencyFormat,
}

impl CartStore {
    /// Creates an empty cart with the default currency format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart seeded with `items`.
    ///
    /// Seeds are normalised: items with `quantity <= 0` are dropped and
    /// repeated products are merged into their first occurrence.
    pub fn with_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut normalised: Vec<CartItem> = Vec::new();

        for item in items {
            if item.quantity <= 0 {
                debug!(product_id = item.product_id(), quantity = item.quantity, "Dropping empty seed item");
                continue;
            }

            match normalised.iter_mut().find(|i| i.product_id() == item.product_id()) {
                Some(existing) => existing.quantity += item.quantity,
                None => normalised.push(item),
            }
        }

        CartStore {
            items: normalised,
            currency: CurrencyFormat::default(),
        }
    }

    /// Replaces the format used by [`total_price_string`](Self::total_price_string).
    pub fn with_currency_format(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product`.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.position(product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity += 1;
                debug!(product_id = product.id, quantity = item.quantity, "Increased cart quantity");
            }
            None => {
                self.items.push(CartItem::new(product.clone(), 1));
                debug!(product_id = product.id, "Added product to cart");
            }
        }
    }

    /// Removes one unit of `product`, dropping the item when it reaches zero.
    pub fn remove_from_cart(&mut self, product: &Product) {
        let Some(index) = self.position(product.id) else {
            return;
        };

        let item = &mut self.items[index];
        item.quantity -= 1;
        debug!(product_id = product.id, quantity = item.quantity, "Decreased cart quantity");

        if item.quantity <= 0 {
            self.items.remove(index);
        }
    }

    /// Removes the whole item for `product`, whatever its quantity.
    pub fn remove_all_from_cart(&mut self, product: &Product) {
        if let Some(index) = self.position(product.id) {
            let removed = self.items.remove(index);
            debug!(product_id = product.id, quantity = removed.quantity, "Removed product from cart");
        }
    }

    /// Empties the cart.
    pub fn remove_all_items(&mut self) {
        debug!(items = self.items.len(), "Clearing cart");
        self.items.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Quantity held for `product`, or 0.
    pub fn quantity(&self, product: &Product) -> i64 {
        self.position(product.id)
            .map(|index| self.items[index].quantity)
            .unwrap_or(0)
    }

    /// Items in insertion order.
    pub fn cart_items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price × quantity over every item.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// [`total_price`](Self::total_price) rendered for display, e.g. `"$628.92"`.
    ///
    /// Computed on every call.
    pub fn total_price_string(&self) -> String {
        self.currency.format(self.total_price())
    }

    /// True when the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Format used for `total_price_string`.
    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.currency
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product_id() == product_id)
    }
}

// =============================================================================
// Shared Cart
// =============================================================================

/// A [`CartStore`] behind `Arc<Mutex<_>>` for multi-threaded hosts.
///
/// Clones share the same cart. A poisoned lock is recovered: every cart
/// operation leaves the store consistent, so the data is still valid.
#[derive(Debug, Clone, Default)]
pub struct SharedCartStore {
    cart: Arc<Mutex<CartStore>>,
}

impl SharedCartStore {
    pub fn new(cart: CartStore) -> Self {
        SharedCartStore {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use onlinestore_state::SharedCartStore;
    ///
    /// let shared = SharedCartStore::default();
    /// assert_eq!(shared.with_cart(|cart| cart.total_price_string()), "$0.00");
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    fn lock(&self) -> MutexGuard<'_, CartStore> {
        self.cart.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn product(id: ProductId, cents: i64) -> Product {
        Product::new(id, format!("test{id}"), Money::from_cents(cents))
    }

    /// Three lines totalling $628.92.
    fn seeded_cart() -> CartStore {
        CartStore::with_items([
            CartItem::new(product(1, 12312), 3),
            CartItem::new(product(2, 7756), 1),
            CartItem::new(product(3, 9100), 2),
        ])
    }

    #[test]
    fn test_total_price_string() {
        let cart = seeded_cart();
        assert_eq!(cart.total_price().cents(), 62892);
        assert_eq!(cart.total_price_string(), "$628.92");
    }

    #[test]
    fn test_total_is_recomputed_after_mutation() {
        let mut cart = seeded_cart();
        assert_eq!(cart.total_price_string(), "$628.92");

        cart.remove_all_from_cart(&product(1, 12312));
        assert_eq!(cart.total_price_string(), "$259.56");

        cart.remove_all_items();
        assert_eq!(cart.total_price_string(), "$0.00");
    }

    #[test]
    fn test_add_existing_product_increments_in_place() {
        let mut cart = seeded_cart();
        let first = product(1, 12312);

        cart.add_to_cart(&first);

        assert_eq!(cart.quantity(&first), 4);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_new_product_appends_one_item() {
        let mut cart = CartStore::new();
        let a = product(1, 100);
        let b = product(2, 200);

        cart.add_to_cart(&a);
        cart.add_to_cart(&b);
        for _ in 0..7 {
            cart.add_to_cart(&a);
        }

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 9);
        assert_eq!(cart.cart_items()[0].product_id(), 1);
        assert_eq!(cart.cart_items()[1].product_id(), 2);
    }

    #[test]
    fn test_add_matches_by_id_not_fields() {
        let mut cart = CartStore::new();
        cart.add_to_cart(&product(7, 500));
        cart.add_to_cart(&Product::new(7, "renamed", Money::from_cents(1)));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity(&product(7, 500)), 2);
    }

    #[test]
    fn test_remove_decrements_then_drops() {
        let mut cart = seeded_cart();
        let third = product(3, 9100);

        cart.remove_from_cart(&third);
        assert_eq!(cart.quantity(&third), 1);
        assert_eq!(cart.item_count(), 3);

        cart.remove_from_cart(&third);
        assert_eq!(cart.quantity(&third), 0);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = seeded_cart();
        let before = cart.cart_items().to_vec();

        cart.remove_from_cart(&product(1000, 1));
        cart.remove_all_from_cart(&product(1000, 1));

        assert_eq!(cart.cart_items(), before.as_slice());
    }

    #[test]
    fn test_removal_keeps_order() {
        let mut cart = seeded_cart();
        cart.remove_all_from_cart(&product(2, 7756));

        let ids: Vec<ProductId> = cart.cart_items().iter().map(CartItem::product_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_all_from_cart_is_idempotent() {
        let mut cart = seeded_cart();
        let first = product(1, 12312);

        cart.remove_all_from_cart(&first);
        let once = cart.cart_items().to_vec();
        cart.remove_all_from_cart(&first);

        assert_eq!(cart.quantity(&first), 0);
        assert_eq!(cart.cart_items(), once.as_slice());
    }

    #[test]
    fn test_remove_all_items() {
        let mut cart = seeded_cart();
        cart.remove_all_items();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_quantity_for_unknown_product() {
        assert_eq!(seeded_cart().quantity(&product(1000, 1)), 0);
    }

    #[test]
    fn test_net_adds_minus_removes_floors_at_zero() {
        let mut cart = CartStore::new();
        let a = product(1, 100);

        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        for _ in 0..5 {
            cart.remove_from_cart(&a);
        }
        assert_eq!(cart.quantity(&a), 0);

        cart.add_to_cart(&a);
        assert_eq!(cart.quantity(&a), 1);
    }

    #[test]
    fn test_seed_normalisation() {
        let cart = CartStore::with_items([
            CartItem::new(product(1, 100), 2),
            CartItem::new(product(2, 200), 0),
            CartItem::new(product(3, 300), -4),
            CartItem::new(product(1, 100), 3),
        ]);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.quantity(&product(1, 100)), 5);
    }

    #[test]
    fn test_custom_currency_format() {
        let euro = CurrencyFormat {
            symbol: "€".into(),
            decimal_separator: ",".into(),
            grouping_separator: ".".into(),
        };
        let cart = seeded_cart().with_currency_format(euro);

        assert_eq!(cart.total_price_string(), "€628,92");
        assert_eq!(cart.currency_format().symbol, "€");
    }

    #[test]
    fn test_shared_cart_across_threads() {
        let shared = SharedCartStore::default();
        let item = product(1, 250);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                let item = item.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        shared.with_cart_mut(|cart| cart.add_to_cart(&item));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.with_cart(|cart| cart.quantity(&item)), 100);
        assert_eq!(shared.with_cart(|cart| cart.total_price_string()), "$250.00");
    }
}
