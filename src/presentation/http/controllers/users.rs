use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::UserListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users.", body = UserListResponse),
        (status = 500, description = "Unexpected failure.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<UserListResponse>> {
    let users = state.services.user_queries.list_users().await.into_http()?;
    Ok(Json(UserListResponse { users }))
}
