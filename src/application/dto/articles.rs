use crate::domain::article::{Article, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Article as returned by the single-article endpoints, body included.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title,
            topic: article.topic,
            author: article.author.into_inner(),
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
            comment_count: article.comment_count,
        }
    }
}

/// Listing row: an article without its body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(article: ArticleSummary) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title,
            topic: article.topic,
            author: article.author.into_inner(),
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
            comment_count: article.comment_count,
        }
    }
}
