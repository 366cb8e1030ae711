use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentBody, NewComment},
        errors::ARTICLE_NOT_FOUND,
        user::Username,
    },
};

pub struct PostCommentCommand {
    pub article_id: String,
    pub username: String,
    pub body: String,
}

impl CommentCommandService {
    /// Adds a comment to an existing article. An unknown article is reported
    /// before the author is considered; an unknown author surfaces from the
    /// store as a bad request.
    pub async fn post_comment(&self, command: PostCommentCommand) -> ApplicationResult<CommentDto> {
        let article_id: ArticleId = command.article_id.parse()?;

        if self.article_repo.find_by_id(article_id).await?.is_none() {
            return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
        }

        let new_comment = NewComment {
            article_id,
            author: Username::new(command.username)?,
            body: CommentBody::new(command.body)?,
        };

        let comment = self.comment_repo.insert(new_comment).await?;
        tracing::info!(comment_id = %comment.id, %article_id, "comment posted");
        Ok(comment.into())
    }
}
