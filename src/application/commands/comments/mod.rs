mod delete;
mod post;
mod service;

pub use delete::DeleteCommentCommand;
pub use post::PostCommentCommand;
pub use service::CommentCommandService;
