use stocksheet_catalog::{CatalogStore, NewProduct, Product};
use stocksheet_export::ExportError;

/// Application state shared across handlers.
///
/// The store is constructed exactly once per process and handed to the
/// router behind an `Arc`; there is no global state.
#[derive(Debug, Default)]
pub struct AppServices {
    catalog: CatalogStore,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            catalog: CatalogStore::new(),
        }
    }

    pub fn add_product(&self, new: NewProduct) -> Product {
        let product = self.catalog.save(new);
        tracing::info!(id = product.id, name = %product.name, "product stored");
        product
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.catalog.list()
    }

    /// Serialize the current catalog contents into an XLSX byte buffer.
    pub fn export_products(&self) -> Result<Vec<u8>, ExportError> {
        let products = self.catalog.list();
        stocksheet_export::generate_workbook(&products)
    }
}

pub fn build_services() -> AppServices {
    AppServices::new()
}
