//! Response envelopes. Every collection and single resource is wrapped in an
//! object keyed by its name, e.g. `{ "articles": [...] }`.
use crate::application::dto::{
    ArticleDto, ArticleSummaryDto, CommentDto, TopicDto, UserDto,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

/// `GET /api`: the OpenAPI document describing every endpoint.
#[derive(Serialize, ToSchema)]
pub struct EndpointsResponse {
    #[schema(value_type = Object)]
    pub endpoints: utoipa::openapi::OpenApi,
}
