use axum::Router;

pub mod system;
pub mod warehouses;

/// Router for all business endpoints.
pub fn router() -> Router {
    Router::new().nest("/warehouse", warehouses::router())
}
