// src/presentation/http/controllers/api.rs
use crate::presentation::http::error::HttpError;
use crate::presentation::http::openapi::ApiDoc;
use crate::presentation::http::openapi_types::{EndpointsResponse, StatusResponse};
use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

const NO_ENDPOINT: &str = "No endpoint found";

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Description of every available endpoint.", body = EndpointsResponse)
    ),
    tag = "System"
)]
pub async fn list_endpoints() -> Json<EndpointsResponse> {
    Json(EndpointsResponse {
        endpoints: ApiDoc::openapi(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

/// Any request that matches no route.
pub async fn fallback() -> impl IntoResponse {
    HttpError::not_found(NO_ENDPOINT)
}
