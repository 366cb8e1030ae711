// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::VoteOnArticleCommand,
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi_types::{ArticleListResponse, ArticleResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Column to sort by. Defaults to `created_at`.
    #[param(example = "votes")]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (case-insensitive). Defaults to `desc`.
    #[param(example = "asc")]
    pub order_by: Option<String>,
    /// Only include articles with this topic slug.
    #[param(example = "mitch")]
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    /// Signed amount added to the current vote count.
    pub inc_votes: i64,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles with comment counts, sorted as requested.", body = ArticleListResponse),
        (status = 400, description = "Unknown sort column or order, or malformed query string.", body = ErrorResponse),
        (status = 404, description = "Topic filter names no known topic.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> HttpResult<Json<ArticleListResponse>> {
    let Query(params) = params?;
    let articles = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            sort_by: params.sort_by,
            order_by: params.order_by,
            topic: params.topic,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleListResponse { articles }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article including its body.", body = ArticleResponse),
        (status = 400, description = "Identifier is not a positive integer.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
) -> HttpResult<Json<ArticleResponse>> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { article_id })
        .await
        .into_http()?;

    Ok(Json(ArticleResponse { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = i64, Path, description = "Article identifier")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "The article after the vote change.", body = ArticleResponse),
        (status = 400, description = "Malformed identifier or body.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn vote_on_article(
    Extension(state): Extension<HttpState>,
    Path(article_id): Path<String>,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> HttpResult<Json<ArticleResponse>> {
    let Json(request) = payload?;

    let article = state
        .services
        .article_commands
        .vote_on_article(VoteOnArticleCommand {
            article_id,
            inc_votes: request.inc_votes,
        })
        .await
        .into_http()?;

    Ok(Json(ArticleResponse { article }))
}
