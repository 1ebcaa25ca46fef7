//! The seam between the event loop and the catalog API.

use std::future::Future;

use catalog_client::{CatalogClient, ClientError};
use catalog_core::{Product, ProductQuery};

/// Where categories and products come from.
///
/// Implemented by [`CatalogClient`]; tests substitute scripted sources.
pub trait CatalogSource {
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, ClientError>>;

    fn products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = Result<Vec<Product>, ClientError>>;
}

impl CatalogSource for CatalogClient {
    fn categories(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> {
        self.fetch_categories()
    }

    fn products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = Result<Vec<Product>, ClientError>> {
        self.fetch_products(query)
    }
}
