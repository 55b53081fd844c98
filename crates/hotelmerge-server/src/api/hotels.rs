use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use hotelmerge_core::Hotel;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

pub(super) const MISSING_FILTER_MESSAGE: &str =
    "Please specify at least one hotel ID(s) or a single destination ID";

/// Search body. Hotel ids take precedence over the destination; a zero
/// destination counts as unset.
#[derive(Debug, Default, Deserialize)]
pub(super) struct SearchRequest {
    #[serde(default)]
    pub hotel_ids: Vec<String>,
    #[serde(default)]
    pub destination_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct HotelsQuery {
    pub ids: Option<String>,
}

pub(super) async fn search_hotels(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<Hotel>>>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let hotels = if !request.hotel_ids.is_empty() {
        state.store.get_by_ids(&request.hotel_ids)
    } else if let Some(destination_id) = request.destination_id.filter(|d| *d != 0) {
        state.store.get_by_destination(destination_id)
    } else {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            MISSING_FILTER_MESSAGE,
        ));
    };

    Ok(ApiResponse::new(hotels, req_id.0))
}

pub(super) async fn list_hotels_by_ids(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<HotelsQuery>,
) -> Result<Json<ApiResponse<Vec<Hotel>>>, ApiError> {
    let ids: Vec<&str> = query
        .ids
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "ids query parameter must list at least one hotel ID",
        ));
    }

    let hotels = state.store.get_by_ids(&ids);
    Ok(ApiResponse::new(hotels, req_id.0))
}

pub(super) async fn list_hotels_by_destination(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    destination_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<Vec<Hotel>>>, ApiError> {
    let Path(destination_id) = destination_id.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;

    let hotels = state.store.get_by_destination(destination_id);
    Ok(ApiResponse::new(hotels, req_id.0))
}
