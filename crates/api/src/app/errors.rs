use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use chainsight_analysis::SnapshotError;
use chainsight_infra::{QueryLogError, QueryServiceError};

pub fn service_error_to_response(err: QueryServiceError) -> axum::response::Response {
    match err {
        QueryServiceError::Snapshot(SnapshotError::Unavailable(msg)) => {
            json_error(StatusCode::SERVICE_UNAVAILABLE, "snapshot_unavailable", msg)
        }
        QueryServiceError::Snapshot(SnapshotError::Inconsistent(msg)) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "snapshot_inconsistent", msg)
        }
        QueryServiceError::Log(QueryLogError::AlreadyExists(id)) => json_error(
            StatusCode::CONFLICT,
            "conflict",
            format!("query {id} already logged"),
        ),
        QueryServiceError::Log(QueryLogError::Storage(msg)) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "query_log_error", msg)
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
