//! # Validation Module
//!
//! Rules a catalog product must pass before it reaches a store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field types, required fields                                      │
//! │  └── Decimal price → integer cents                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Non-negative price            (fatal: catalog rejected)           │
//! │  └── Non-empty title, image URL    (soft: logged, product kept)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ProductStore (never sees a negative price)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use onlinestore_core::validation::{validate_price, validate_title};
//! use onlinestore_core::Money;
//!
//! assert!(validate_price(Money::from_cents(1099)).is_ok());
//! assert!(validate_title("").is_err());
//! ```

use url::{ParseError, Url};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product title.
///
/// ## Rules
/// - Must not be blank
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is a free item)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an image URL.
///
/// ## Rules
/// - Empty is allowed (placeholder image)
/// - Relative references (`www.apple.com`, `/img/1.jpg`) are allowed
/// - An absolute URL must parse
pub fn validate_image_url(image_url: &str) -> ValidationResult<()> {
    if image_url.is_empty() {
        return Ok(());
    }

    match Url::parse(image_url) {
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(e) => Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Checks the rule that rejects a whole catalog: a negative price.
pub fn validate_product(product: &Product) -> CoreResult<()> {
    validate_price(product.price).map_err(|source| CoreError::InvalidProduct {
        id: product.id,
        source,
    })
}

/// Soft rule violations. The product is still usable; callers log these.
pub fn product_warnings(product: &Product) -> Vec<ValidationError> {
    [
        validate_title(&product.title),
        validate_image_url(&product.image_url),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Backpack").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(500)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert_eq!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("").is_ok());
        assert!(validate_image_url("https://fakestoreapi.com/img/1.jpg").is_ok());
        assert!(validate_image_url("www.apple.com").is_ok());
        assert!(validate_image_url("/img/1.jpg").is_ok());
        assert!(validate_image_url("http://").is_err());
    }

    #[test]
    fn test_validate_product_reports_id() {
        let product = Product::new(42, "Jacket", Money::from_cents(-500));
        let err = validate_product(&product).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct { id: 42, .. }));

        let ok = Product::new(43, "Jacket", Money::from_cents(500));
        assert!(validate_product(&ok).is_ok());
    }

    #[test]
    fn test_soft_rules_do_not_fail_the_product() {
        let mut product = Product::new(7, " ", Money::from_cents(100));
        product.image_url = "http://".to_string();

        assert!(validate_product(&product).is_ok());
        let warnings = product_warnings(&product);
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], ValidationError::Required { .. }));
        assert!(matches!(warnings[1], ValidationError::InvalidFormat { .. }));

        product.title = "Jacket".to_string();
        product.image_url = "www.apple.com".to_string();
        assert!(product_warnings(&product).is_empty());
    }
}
