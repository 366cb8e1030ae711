// src/application/commands/articles/vote.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, VoteIncrement},
};

pub struct VoteOnArticleCommand {
    pub article_id: String,
    pub inc_votes: i64,
}

impl ArticleCommandService {
    /// Adds `inc_votes` (possibly negative) to the article's vote count.
    pub async fn vote_on_article(
        &self,
        command: VoteOnArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id: ArticleId = command.article_id.parse()?;
        let increment = VoteIncrement::new(command.inc_votes)?;

        let article = self
            .write_repo
            .adjust_votes(id, increment)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Not found"))?;

        tracing::info!(article_id = %id, delta = increment.value(), votes = article.votes, "article votes adjusted");
        Ok(article.into())
    }
}
