use serde::{Deserialize, Serialize};

/// A stored catalog record. The identifier is assigned by the
/// [`CatalogStore`](crate::CatalogStore) at insertion time and is unique
/// per process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub category: String,
    pub name: String,
    /// Unit count. No minimum is enforced at the domain level.
    pub quantity: i64,
    pub price: f64,
}

impl Product {
    /// Derived value: `quantity × price`. Computed on demand, never stored.
    pub fn total_cost(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// A caller-side record that has not been stored yet.
///
/// Callers cannot pre-assign an identifier: the store consumes a
/// `NewProduct` and hands back the identified [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub category: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}
