// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://localhost:4000";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api::list_endpoints,
        crate::presentation::http::controllers::api::health,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::vote_on_article,
        crate::presentation::http::controllers::comments::list_article_comments,
        crate::presentation::http::controllers::comments::post_comment,
        crate::presentation::http::controllers::comments::delete_comment
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::openapi_types::StatusResponse,
            crate::presentation::http::openapi_types::TopicListResponse,
            crate::presentation::http::openapi_types::UserListResponse,
            crate::presentation::http::openapi_types::ArticleListResponse,
            crate::presentation::http::openapi_types::ArticleResponse,
            crate::presentation::http::openapi_types::CommentListResponse,
            crate::presentation::http::openapi_types::CommentResponse,
            crate::presentation::http::controllers::articles::VoteRequest,
            crate::presentation::http::controllers::comments::NewCommentRequest,
            crate::application::dto::TopicDto,
            crate::application::dto::UserDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Topics", description = "Topic endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "Articles", description = "Article listing, retrieval and voting"),
        (name = "Comments", description = "Comment endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerListModifier),
    info(
        title = "Newsdesk API",
        description = "News and discussion backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated), always keeping the
/// local development address.
struct ServerListModifier;

impl Modify for ServerListModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();
        urls.push(DEFAULT_SERVER_URL.to_string());

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

/// Swagger UI on `/docs` (which also serves `/openapi.json`) and ReDoc on
/// `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
