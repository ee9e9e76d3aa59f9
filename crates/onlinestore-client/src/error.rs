//! # Client Error Types
//!
//! Error types for catalog fetches.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidUrl     │  │  Request        │  │  Decode                 │ │
//! │  │  InvalidConfig  │  │  Timeout        │  │  InvalidProduct         │ │
//! │  │                 │  │  Status         │  │                         │ │
//! │  │                 │  │  Unavailable    │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every variant ends up in front of a user via
//! `LoadingState::Error`, so messages are written as sentences, not codes.

use onlinestore_core::CoreError;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Everything that can go wrong fetching the catalog.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured base URL cannot be used.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// A client setting is out of range.
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request could not be sent or the connection dropped.
    #[error("Could not reach the catalog: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("The catalog request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("The catalog responded with status {status}")]
    Status { status: u16 },

    /// The catalog is not reachable at all (offline doubles, maintenance).
    #[error("The catalog is unavailable: {0}")]
    Unavailable(String),

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// The response body is not a product list.
    #[error("Could not read the catalog response: {0}")]
    Decode(String),

    /// A product in the response broke an ingest rule.
    #[error("The catalog sent an invalid product: {0}")]
    InvalidProduct(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if let Some(status) = err.status() {
            ClientError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Request(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true if a later attempt could succeed.
    ///
    /// The stores never retry on their own; this is for hosts that offer a
    /// "try again" button.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Request(_) | ClientError::Timeout | ClientError::Unavailable(_) => true,
            ClientError::Status { status } => *status >= 500 || *status == 429,
            ClientError::InvalidUrl(_)
            | ClientError::InvalidConfig(_)
            | ClientError::Decode(_)
            | ClientError::InvalidProduct(_) => false,
        }
    }
}
