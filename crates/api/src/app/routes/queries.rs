use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::UserContext;

pub fn router() -> Router {
    Router::new().route("/", post(ask).get(history))
}

/// Answer a free-text question and record it in the caller's history.
pub async fn ask(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Json(body): Json<dto::AskRequest>,
) -> axum::response::Response {
    match services.queries.ask(user.user_id(), &body.question) {
        Ok(answer) => (StatusCode::CREATED, Json(answer)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn history(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(user): Extension<UserContext>,
    Query(params): Query<dto::HistoryQuery>,
) -> axum::response::Response {
    let limit = params.limit.unwrap_or(services.history_limit);
    match services.queries.history(user.user_id(), limit) {
        Ok(items) => (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
