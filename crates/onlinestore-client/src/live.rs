//! # Live Catalog Client
//!
//! reqwest-backed [`ApiClient`] that talks to the real catalog.
//!
//! ## Request Flow
//! ```text
//! fetch_products()
//!      │
//!      ▼
//! GET {base_url}/products ──── timeout ────► ClientError::Timeout
//!      │
//!      ├── non-2xx ───────────────────────► ClientError::Status
//!      │
//!      ▼
//! body → Vec<Product> ──── bad JSON ──────► ClientError::Decode
//!      │
//!      ▼
//! validate_product(each) ─ negative price ► ClientError::InvalidProduct
//!      │
//!      ├── blank title, bad image URL ─────► warn!, product kept
//!      │
//!      ▼
//! Ok(products)
//! ```

use async_trait::async_trait;
use onlinestore_core::validation::{product_warnings, validate_product};
use onlinestore_core::Product;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, warn};
use url::Url;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP implementation of [`ApiClient`].
///
/// Cheap to clone: the underlying `reqwest::Client` is reference-counted.
#[derive(Debug, Clone)]
pub struct LiveApiClient {
    http: reqwest::Client,
    products_url: Url,
}

impl LiveApiClient {
    /// Builds a client from validated configuration.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(LiveApiClient {
            http,
            products_url: config.products_url()?,
        })
    }

    /// Endpoint this client fetches from.
    pub fn products_url(&self) -> &Url {
        &self.products_url
    }
}

#[async_trait]
impl ApiClient for LiveApiClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        debug!(url = %self.products_url, "Fetching catalog");

        let response = self
            .http
            .get(self.products_url.clone())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;

        for product in &products {
            if let Err(e) = validate_product(product) {
                warn!(product_id = product.id, error = %e, "Rejecting catalog response");
                return Err(e.into());
            }
            for issue in product_warnings(product) {
                warn!(product_id = product.id, issue = %issue, "Keeping product with invalid field");
            }
        }

        debug!(count = products.len(), "Catalog fetched");
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> LiveApiClient {
        LiveApiClient::new(ClientConfig::with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[
                    {"id": 1, "title": "Backpack", "price": 109.95, "description": "",
                     "category": "men's clothing", "image": "https://fakestoreapi.com/img/1.jpg",
                     "rating": {"rate": 3.9, "count": 120}},
                    {"id": 2, "title": "T-Shirt", "price": 22.3, "description": "",
                     "category": "men's clothing", "image": "https://fakestoreapi.com/img/2.jpg"}
                ]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let products = client_for(&server).await.fetch_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price.cents(), 10995);
        assert_eq!(products[1].price.cents(), 2230);
    }

    #[tokio::test]
    async fn test_fetch_empty_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
            .mount(&server)
            .await;

        let products = client_for(&server).await.fetch_products().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_products().await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 500 }));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"products": []}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_products().await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_negative_price_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id": 5, "title": "Refund", "price": -1.0}]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch_products().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidProduct(_)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_relative_image_url_is_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[
                    {"id": 1, "title": "Backpack", "price": 109.95,
                     "image": "https://fakestoreapi.com/img/1.jpg"},
                    {"id": 2, "title": "iPhone", "price": 999.0, "image": "www.apple.com"},
                    {"id": 3, "title": "Sticker", "price": 1.5, "image": "http://"}
                ]"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let products = client_for(&server).await.fetch_products().await.unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[1].image_url, "www.apple.com");
        assert_eq!(products[2].image_url, "http://");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = LiveApiClient::new(ClientConfig::with_base_url("mailto:shop@example.com"))
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_products_url() {
        let client = LiveApiClient::new(ClientConfig::default()).unwrap();
        assert_eq!(
            client.products_url().as_str(),
            "https://fakestoreapi.com/products"
        );
    }
}
