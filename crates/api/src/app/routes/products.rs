use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use tradegate_core::{PageRequest, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    let page = PageRequest::resolve(params.page, params.limit);

    match services.list_products(page).await {
        Ok(products) => {
            let items: Vec<_> = products.iter().map(dto::product_to_view).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::error_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    match services.get_product(product_id).await {
        Ok(product) => (StatusCode::OK, Json(dto::product_to_view(&product))).into_response(),
        Err(e) => errors::error_response(e),
    }
}
