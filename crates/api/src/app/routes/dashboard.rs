use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/stats", get(stats))
}

pub async fn stats(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.queries.dashboard() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
