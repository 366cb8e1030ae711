// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

/// A full article as served by the single-article endpoints.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: Username,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Listing projection of an article: everything but the body.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub topic: String,
    pub author: Username,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
            comment_count: article.comment_count,
        }
    }
}
