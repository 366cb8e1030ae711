// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{DeleteCommentCommand, PostCommentCommand},
    queries::comments::ListArticleCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::{CommentListResponse, CommentResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewCommentRequest {
    /// Existing username of the author.
    pub username: String,
    pub body: String,
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Comments on the article, newest first.", body = CommentListResponse),
        (status = 400, description = "Identifier is not a positive integer.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<CommentListResponse>> {
    let comments = state
        .services
        .comment_queries
        .list_comments(ListArticleCommentsQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(CommentListResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i64, Path, description = "Article identifier")),
    request_body = NewCommentRequest,
    responses(
        (status = 200, description = "The stored comment.", body = CommentResponse),
        (status = 400, description = "Malformed body or unknown author.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn post_comment(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    payload: Result<Json<NewCommentRequest>, JsonRejection>,
) -> HttpResult<Json<CommentResponse>> {
    let Json(request) = payload?;

    let comment = state
        .services
        .comment_commands
        .post_comment(PostCommentCommand {
            article_id,
            username: request.username,
            body: request.body,
        })
        .await
        .into_http()?;

    Ok(Json(CommentResponse { comment }))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i64, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 400, description = "Identifier is not a positive integer.", body = ErrorResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { comment_id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
