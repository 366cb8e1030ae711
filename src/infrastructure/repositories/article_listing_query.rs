// src/infrastructure/repositories/article_listing_query.rs
//! SQL for the article listing.
//!
//! Only the topic is caller-supplied data, and it always travels as a bound
//! parameter. The ORDER BY identifier and direction come from the
//! `SortColumn`/`SortOrder` enums, which have already been validated.
use crate::domain::article::{ArticleListing, SortColumn};

const SELECT_SUMMARY: &str = "SELECT articles.article_id, articles.title, articles.topic, \
     articles.author, articles.created_at, articles.article_img_url, articles.votes, \
     COUNT(comments.comment_id) AS comment_count \
     FROM articles \
     LEFT JOIN comments ON comments.article_id = articles.article_id";

const GROUP_BY_SUMMARY: &str = " GROUP BY articles.article_id, articles.title, articles.topic, \
     articles.author, articles.created_at, articles.article_img_url, articles.votes";

/// Query text plus the values for its positional placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub sql: String,
    pub binds: Vec<String>,
}

impl ListingQuery {
    pub fn build(listing: &ArticleListing) -> Self {
        let mut sql = String::from(SELECT_SUMMARY);
        let mut binds = Vec::new();

        if let Some(topic) = &listing.topic {
            binds.push(topic.clone());
            sql.push_str(" WHERE articles.topic = $");
            sql.push_str(&binds.len().to_string());
        }

        sql.push_str(GROUP_BY_SUMMARY);

        let direction = listing.order.as_sql();
        sql.push_str(" ORDER BY ");
        sql.push_str(sort_expression(listing.sort_by));
        sql.push(' ');
        sql.push_str(direction);
        if listing.sort_by != SortColumn::ArticleId {
            sql.push_str(", articles.article_id ");
            sql.push_str(direction);
        }

        Self { sql, binds }
    }
}

const fn sort_expression(column: SortColumn) -> &'static str {
    match column {
        SortColumn::ArticleId => "articles.article_id",
        SortColumn::Title => "articles.title",
        SortColumn::Topic => "articles.topic",
        SortColumn::Author => "articles.author",
        SortColumn::CreatedAt => "articles.created_at",
        SortColumn::ArticleImgUrl => "articles.article_img_url",
        SortColumn::Votes => "articles.votes",
        SortColumn::CommentCount => "comment_count",
    }
}
