use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use tradegate_core::{ConsumerId, PageRequest, PartnerId, ServiceError};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_consumers).post(create_consumer))
        .route("/:id", get(get_consumer).delete(delete_consumer))
}

pub async fn list_consumers(
    Extension(services): Extension<Arc<AppServices>>,
    Path(partner_id): Path<String>,
    Query(params): Query<dto::PageParams>,
) -> axum::response::Response {
    let partner_id: PartnerId = match partner_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };
    let page = PageRequest::resolve(params.page, params.limit);

    match services.list_consumers(partner_id, page).await {
        Ok(consumers) => {
            let items: Vec<_> = consumers.iter().map(dto::consumer_to_partner_view).collect();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::error_response(e),
    }
}

pub async fn create_consumer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(partner_id): Path<String>,
    Json(body): Json<dto::CreateConsumerRequest>,
) -> axum::response::Response {
    let partner_id: PartnerId = match partner_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    match services.create_consumer(partner_id, body.into_draft()).await {
        Ok(consumer) => (
            StatusCode::CREATED,
            Json(dto::consumer_to_partner_view(&consumer)),
        )
            .into_response(),
        Err(e) => errors::error_response(e),
    }
}

pub async fn get_consumer(
    Extension(services): Extension<Arc<AppServices>>,
    Path((partner_id, id)): Path<(String, String)>,
) -> axum::response::Response {
    let (partner_id, consumer_id) = match parse_ids(&partner_id, &id) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    match services.get_consumer(partner_id, consumer_id).await {
        Ok(consumer) => (
            StatusCode::OK,
            Json(dto::consumer_to_partner_view(&consumer)),
        )
            .into_response(),
        Err(e) => errors::error_response(e),
    }
}

pub async fn delete_consumer(
    Extension(services): Extension<Arc<AppServices>>,
    Path((partner_id, id)): Path<(String, String)>,
) -> axum::response::Response {
    let (partner_id, consumer_id) = match parse_ids(&partner_id, &id) {
        Ok(v) => v,
        Err(e) => return errors::error_response(e),
    };

    match services.delete_consumer(partner_id, consumer_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::error_response(e),
    }
}

fn parse_ids(partner_id: &str, consumer_id: &str) -> Result<(PartnerId, ConsumerId), ServiceError> {
    Ok((partner_id.parse()?, consumer_id.parse()?))
}
