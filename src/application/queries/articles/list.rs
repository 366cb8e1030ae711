use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleSummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListing, ArticleListingParams},
        errors::DomainError,
    },
};

/// Message returned when a topic filter names no known topic.
pub const TOPIC_NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub topic: Option<String>,
}

impl ArticleQueryService {
    /// Lists articles with their comment counts.
    ///
    /// Sort and order are validated before the store is touched. An empty
    /// result under a topic filter triggers one extra lookup to tell a known
    /// topic without articles (empty list) from an unknown topic (not found).
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let listing = ArticleListing::normalize(ArticleListingParams {
            sort_by: query.sort_by,
            order_by: query.order_by,
            topic: query.topic,
        })
        .map_err(DomainError::from)?;

        // Text columns cannot hold NUL, so no topic slug contains one and the
        // store would reject the parameter outright.
        if listing.topic.as_deref().is_some_and(|topic| topic.contains('\0')) {
            tracing::debug!("topic filter contains NUL, no such topic");
            return Err(ApplicationError::not_found(TOPIC_NOT_FOUND));
        }

        let articles = self.read_repo.list(&listing).await?;

        if articles.is_empty() {
            if let Some(topic) = listing.topic.as_deref() {
                self.resolve_empty_topic_filter(topic).await?;
            }
            return Ok(Vec::new());
        }

        Ok(articles.into_iter().map(Into::into).collect())
    }

    async fn resolve_empty_topic_filter(&self, topic: &str) -> ApplicationResult<()> {
        tracing::debug!(topic, "topic filter matched no articles, checking topic exists");
        match self.topic_repo.find_by_slug(topic).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(TOPIC_NOT_FOUND)),
        }
    }
}
