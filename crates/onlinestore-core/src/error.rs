//! # Error Types
//!
//! Domain-specific error types for onlinestore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  onlinestore-core errors (this file)                                   │
//! │  ├── CoreError        - Domain errors (bad amounts, bad products)       │
//! │  └── ValidationError  - Field-level rule violations                     │
//! │                                                                         │
//! │  onlinestore-client errors (separate crate)                            │
//! │  └── ClientError      - Catalog fetch failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → LoadingState::Error │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations have no error type at all: every cart mutation is total.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A decimal amount could not be represented as money.
    ///
    /// ## When This Occurs
    /// - The catalog sent `NaN` or an infinite price
    /// - The amount overflows i64 cents
    #[error("Amount {0} cannot be represented as money")]
    UnrepresentableAmount(String),

    /// A product failed an ingest rule.
    #[error("Product {id} is invalid: {source}")]
    InvalidProduct {
        id: ProductId,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., unparseable URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
