use axum::{extract::State, Extension, Json};
use hotelmerge_loader::LoadReport;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

/// Runs one load over every configured supplier source.
///
/// Partial failures still merge the healthy sources; the response is a 502
/// naming each failed source.
pub(super) async fn reload(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<LoadReport>>, ApiError> {
    match state.loader.load_all().await {
        Ok(report) => Ok(ApiResponse::new(report, req_id.0)),
        Err(err) => {
            let failed: Vec<String> = err.failures().iter().map(ToString::to_string).collect();
            Err(ApiError::new(
                req_id.0,
                "load_failed",
                format!("{err}: {}", failed.join("; ")),
            ))
        }
    }
}
