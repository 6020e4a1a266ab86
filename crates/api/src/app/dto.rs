use serde::Deserialize;

use stocksheet_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub category: String,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

// -------------------------
// Response mapping
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id,
        "category": product.category,
        "name": product.name,
        "quantity": product.quantity,
        "price": product.price,
    })
}
