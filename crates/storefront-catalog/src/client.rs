//! Catalog client trait and HTTP implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::product::Product;

/// Read-only access to the product catalog.
///
/// The trait is the seam between controllers and the network; tests substitute
/// in-memory implementations.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch every product in the catalog.
    async fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch the products belonging to one category.
    async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError>;

    /// Fetch the list of category names.
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Fetch a single product by id.
    async fn fetch_product(&self, id: &str) -> Result<Product, CatalogError>;
}

/// HTTP implementation of [`CatalogClient`].
///
/// Plain GET requests against a fixed base; response bodies are JSON mapping
/// directly onto [`Product`]. No auth header, no pagination parameters.
pub struct HttpCatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalogClient {
    /// Create a client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.endpoint(path);
        debug!(%url, "catalog request");

        let response = self.http.get(&url).send().await.map_err(CatalogError::from)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(url));
        }
        if !status.is_success() {
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let bytes = response.bytes().await.map_err(CatalogError::from)?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json("/products").await
    }

    async fn fetch_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.get_json(&format!("/products/category/{category}")).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json("/products/categories").await
    }

    async fn fetch_product(&self, id: &str) -> Result<Product, CatalogError> {
        self.get_json(&format!("/products/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let client = HttpCatalogClient::new(CatalogConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.endpoint("/products"), "https://example.com/products");
        assert_eq!(
            client.endpoint("/products/category/home"),
            "https://example.com/products/category/home"
        );
    }

    #[test]
    fn test_product_list_decodes() {
        let json = r#"[
            {"id": 1, "title": "A", "price": 1.0, "description": "a", "category": "c",
             "image": "u", "rating": {"rate": 4.0, "count": 2}},
            {"id": 2, "title": "B", "price": 2.0, "description": "b", "category": "c",
             "image": "u", "rating": {"rate": 3.0, "count": 1}}
        ]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "1");
    }
}
