//! Plain-text views of the store state.

use onlinestore_core::CurrencyFormat;
use onlinestore_state::{CartStore, LoadingState, LoadingStateObserver};
use tracing::info;

/// Logs every loading state transition.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoadingStateObserver for LoggingObserver {
    fn on_state_change(&self, state: &LoadingState) {
        info!(state = %state, "Catalog state changed");
    }
}

/// Renders the product listing screen.
pub fn render_listing(state: &LoadingState, currency: &CurrencyFormat) -> String {
    match state {
        LoadingState::NotStarted => "Catalog not loaded yet".to_string(),
        LoadingState::Loading => "Loading products...".to_string(),
        LoadingState::Loaded { products } => products
            .iter()
            .map(|p| format!("#{:<4} {:<48} {:>12}", p.id, p.title, currency.format(p.price)))
            .collect::<Vec<_>>()
            .join("\n"),
        LoadingState::Empty => "No products available".to_string(),
        LoadingState::Error { message } => format!("Could not load products: {}", message),
    }
}

/// Renders the cart screen: one line per item, then the total.
pub fn render_cart(cart: &CartStore) -> String {
    let mut lines: Vec<String> = cart
        .cart_items()
        .iter()
        .map(|item| {
            format!(
                "{:>3} x {:<44} {:>12}",
                item.quantity,
                item.product.title,
                cart.currency_format().format(item.line_total())
            )
        })
        .collect();

    lines.push(format!("Total: {}", cart.total_price_string()));
    lines.join("\n")
}
