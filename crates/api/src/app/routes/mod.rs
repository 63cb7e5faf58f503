use axum::Router;

pub mod consumers;
pub mod products;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/partners/:partner_id/consumers", consumers::router())
        .nest("/products", products::router())
}
