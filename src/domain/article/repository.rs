use crate::domain::article::entity::{Article, ArticleSummary};
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::{ArticleId, VoteIncrement};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Runs a validated listing; an empty vector says nothing about whether the
    /// topic filter names a real topic.
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Returns `None` when no article has the given id.
    async fn adjust_votes(
        &self,
        id: ArticleId,
        increment: VoteIncrement,
    ) -> DomainResult<Option<Article>>;
}
