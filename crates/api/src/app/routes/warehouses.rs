use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/:id", get(get_warehouse).delete(archive_warehouse))
        .route("/:business_unit_code/replacement", post(replace_warehouse))
}

pub async fn list_warehouses(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.warehouses.list() {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.warehouses.get(&id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let payload = match dto::parse_payload(&body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.warehouses.create(payload, Utc::now()) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn archive_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.warehouses.archive(&id, Utc::now()) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(business_unit_code): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let payload = match dto::parse_payload(&body) {
        Ok(p) => dto::with_path_code(p, &business_unit_code),
        Err(resp) => return resp,
    };

    match services
        .warehouses
        .replace(&business_unit_code, payload, Utc::now())
    {
        Ok(replacement) => (StatusCode::OK, Json(replacement)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
