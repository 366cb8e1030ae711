// src/domain/article/listing.rs
//! Normalization of article listing requests.
//!
//! Sort column and direction end up as identifiers and keywords in SQL text,
//! so they are only ever produced from the closed enums below. The topic is a
//! plain value and is bound as a query parameter later on; it is not checked
//! here.
use crate::domain::errors::DomainError;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Invalid sort_by column")]
    InvalidSortColumn,
    #[error("Invalid order query")]
    InvalidOrder,
}

impl From<ListingError> for DomainError {
    fn from(err: ListingError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    ArticleImgUrl,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [Self; 8] = [
        Self::ArticleId,
        Self::Title,
        Self::Topic,
        Self::Author,
        Self::CreatedAt,
        Self::ArticleImgUrl,
        Self::Votes,
        Self::CommentCount,
    ];

    /// Name accepted in the `sort_by` query parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArticleId => "article_id",
            Self::Title => "title",
            Self::Topic => "topic",
            Self::Author => "author",
            Self::CreatedAt => "created_at",
            Self::ArticleImgUrl => "article_img_url",
            Self::Votes => "votes",
            Self::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortColumn {
    type Err = ListingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|column| column.as_str() == raw)
            .ok_or(ListingError::InvalidSortColumn)
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ListingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(ListingError::InvalidOrder)
        }
    }
}

/// Raw listing parameters as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct ArticleListingParams {
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub topic: Option<String>,
}

/// A validated listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleListing {
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ArticleListing {
    pub fn normalize(params: ArticleListingParams) -> Result<Self, ListingError> {
        let sort_by = params
            .sort_by
            .as_deref()
            .map_or(Ok(SortColumn::default()), str::parse)?;
        let order = params
            .order_by
            .as_deref()
            .map_or(Ok(SortOrder::default()), str::parse)?;

        Ok(Self {
            sort_by,
            order,
            topic: params.topic,
        })
    }
}
