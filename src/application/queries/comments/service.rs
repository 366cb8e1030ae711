use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, comment::CommentRepository};

pub struct CommentQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }
}
