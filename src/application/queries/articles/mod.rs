mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleQuery;
pub use list::{ListArticlesQuery, TOPIC_NOT_FOUND};
pub use service::ArticleQueryService;
