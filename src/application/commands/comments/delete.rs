use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub comment_id: String,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id: CommentId = command.comment_id.parse()?;

        if !self.comment_repo.delete(id).await? {
            return Err(ApplicationError::not_found("comment does not exist"));
        }

        tracing::info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}
