use std::sync::{Mutex, PoisonError};

use crate::product::{NewProduct, Product};

/// The identifier counter starts here; the first assigned id is
/// `ID_SEED + 1`. The seed represents the highest id already issued before
/// this system took over the catalog.
pub const ID_SEED: u32 = 100;

#[derive(Debug)]
struct StoreInner {
    last_id: u32,
    products: Vec<Product>,
}

/// In-memory product store.
///
/// Owns the ordered collection and the identifier counter behind a single
/// lock, so `save` is atomic with respect to concurrent `save`/`list`
/// callers. Construct one instance at startup and share it via `Arc`;
/// state lives only as long as the process.
#[derive(Debug)]
pub struct CatalogStore {
    inner: Mutex<StoreInner>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                last_id: ID_SEED,
                products: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // Writers never panic between the counter bump and the append, so a
        // poisoned lock still guards consistent state; recover and continue.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign the next identifier and append the record.
    ///
    /// Identifiers are unique and strictly increasing in assignment order;
    /// the counter never decrements and ids are never reused. Cannot fail
    /// under documented use.
    pub fn save(&self, new: NewProduct) -> Product {
        let mut inner = self.lock();
        inner.last_id += 1;
        let product = Product {
            id: inner.last_id,
            category: new.category,
            name: new.name,
            quantity: new.quantity,
            price: new.price,
        };
        inner.products.push(product.clone());
        product
    }

    /// Snapshot of all stored products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
