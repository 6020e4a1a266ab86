use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stocksheet_catalog::NewProduct;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Media type for the exported workbook.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/export", get(export_products))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    // Boundary validation only; the store itself accepts anything and
    // cannot fail. Negative quantities are allowed (stock adjustments).
    if body.name.trim().is_empty() {
        return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", "name cannot be empty");
    }
    if body.category.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "category cannot be empty",
        );
    }

    let product = services.add_product(NewProduct {
        category: body.category,
        name: body.name,
        quantity: body.quantity,
        price: body.price,
    });

    (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = services
        .list_products()
        .iter()
        .map(dto::product_to_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn export_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.export_products() {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"products.xlsx\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "catalog export failed");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "export_failed", e.to_string())
        }
    }
}
