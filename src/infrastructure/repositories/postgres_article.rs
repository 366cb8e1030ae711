// src/infrastructure/repositories/postgres_article.rs
use super::{article_listing_query::ListingQuery, map_sqlx};
use crate::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSummary,
    ArticleWriteRepository, VoteIncrement,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.article_id)?,
            title: row.title,
            topic: row.topic,
            author: Username::new(row.author)?,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(row.article_id)?,
            title: row.title,
            topic: row.topic,
            author: Username::new(row.author)?,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        })
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author,
                    articles.body, articles.created_at, articles.votes, articles.article_img_url,
                    COUNT(comments.comment_id) AS comment_count
             FROM articles
             LEFT JOIN comments ON comments.article_id = articles.article_id
             WHERE articles.article_id = $1
             GROUP BY articles.article_id",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let query = ListingQuery::build(listing);

        let mut statement = sqlx::query_as::<_, ArticleSummaryRow>(&query.sql);
        for value in &query.binds {
            statement = statement.bind(value.as_str());
        }

        let rows = statement.fetch_all(&self.pool).await.map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleSummary::try_from)
            .collect::<Result<Vec<_>, _>>()
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn adjust_votes(
        &self,
        id: ArticleId,
        increment: VoteIncrement,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "WITH updated AS (
                 UPDATE articles SET votes = votes + $1
                 WHERE article_id = $2
                 RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
             )
             SELECT updated.article_id, updated.title, updated.topic, updated.author,
                    updated.body, updated.created_at, updated.votes, updated.article_img_url,
                    (SELECT COUNT(*) FROM comments WHERE comments.article_id = updated.article_id)
                        AS comment_count
             FROM updated",
        )
        .bind(increment.value())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
