//! Products service.

use avaria::products::{self, Product};
use mockall::automock;
use tracing::error;

use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct StoreProductsService {
    store: RecordStore,
}

impl StoreProductsService {
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

impl ProductsService for StoreProductsService {
    fn list_products(&self) -> Vec<Product> {
        self.store.get_all().unwrap_or_else(|error| {
            error!(%error, "failed to load products");

            Vec::new()
        })
    }

    fn find_by_code(&self, code: &str) -> Option<Product> {
        products::find_by_code(&self.list_products(), code).cloned()
    }
}

#[automock]
pub trait ProductsService: Send + Sync {
    /// The product catalog. Empty if it cannot be read.
    fn list_products(&self) -> Vec<Product>;

    /// Product whose code matches `code`, ignoring case and surrounding whitespace.
    fn find_by_code(&self, code: &str) -> Option<Product>;
}
