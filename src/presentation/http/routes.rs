// src/presentation/http/routes.rs
use crate::config::{AppConfig, RateLimitSettings};
use crate::presentation::http::controllers::{api, articles, comments, topics, users};
use crate::presentation::http::middleware::rate_limit_layer;
use crate::presentation::http::openapi;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Cross-cutting router options taken from configuration.
#[derive(Clone, Debug)]
pub struct RouterSettings {
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            rate_limit: None,
        }
    }
}

impl From<&AppConfig> for RouterSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        }
    }
}

/// Router with permissive CORS and no rate limiting.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_settings(state, &RouterSettings::default())
}

pub fn build_router_with_settings(state: HttpState, settings: &RouterSettings) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(api::health))
        .route("/api", get(api::list_endpoints))
        .route("/api/topics", get(topics::list_topics))
        .route("/api/users", get(users::list_users))
        .route("/api/articles", get(articles::list_articles))
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article).patch(articles::vote_on_article),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(comments::list_article_comments).post(comments::post_comment),
        )
        .route("/api/comments/{comment_id}", delete(comments::delete_comment))
        .fallback(api::fallback);

    if let Some(limits) = settings.rate_limit {
        match rate_limit_layer(limits) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!(?limits, "rate limiting disabled: invalid quota"),
        }
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
