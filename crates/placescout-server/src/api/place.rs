use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use placescout_scraper::{PlaceEnvelope, PlaceSuccess};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct PlaceQuery {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PlaceRequest {
    pub url: String,
}

pub(super) async fn scrape_place_query(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PlaceQuery>,
) -> Result<Json<ApiResponse<PlaceSuccess>>, ApiError> {
    let Some(url) = query.url.filter(|u| !u.trim().is_empty()) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "missing required query parameter `url`",
        ));
    };
    scrape(&state, req_id, url.trim()).await
}

pub(super) async fn scrape_place_body(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<PlaceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PlaceSuccess>>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "bad_request", rejection.body_text())
    })?;
    let url = request.url.trim();
    if url.is_empty() {
        return Err(ApiError::new(req_id.0, "bad_request", "`url` must not be empty"));
    }
    scrape(&state, req_id, url).await
}

async fn scrape(
    state: &AppState,
    req_id: RequestId,
    url: &str,
) -> Result<Json<ApiResponse<PlaceSuccess>>, ApiError> {
    tracing::info!(request_id = %req_id.0, url, "scrape requested");

    match state.scraper.scrape_envelope(url).await {
        PlaceEnvelope::Success(data) => Ok(Json(ApiResponse {
            data,
            meta: ResponseMeta::new(req_id.0),
        })),
        PlaceEnvelope::Failure(failure) => Err(ApiError::from_failure(req_id.0, failure)),
    }
}
