//! # Client Configuration
//!
//! The `[api]` section of `onlinestore.toml`.
//!
//! ```toml
//! [api]
//! base_url = "https://fakestoreapi.com"
//! timeout_secs = 10
//! user_agent = "onlinestore/0.1"
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Connection settings for [`crate::LiveApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Catalog root; `/products` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sent as the `User-Agent` header.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://fakestoreapi.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("onlinestore/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Creates a config pointing at `base_url` with default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolves the product list endpoint.
    ///
    /// ## Example
    /// ```rust
    /// use onlinestore_client::ClientConfig;
    ///
    /// let config = ClientConfig::with_base_url("https://fakestoreapi.com/");
    /// assert_eq!(
    ///     config.products_url().unwrap().as_str(),
    ///     "https://fakestoreapi.com/products"
    /// );
    /// ```
    pub fn products_url(&self) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot have a path appended", self.base_url))
            })?
            .pop_if_empty()
            .push("products");
        Ok(url)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "Catalog URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
