pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleSummary};
pub use listing::{
    ArticleListing, ArticleListingParams, ListingError, SortColumn, SortOrder,
};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, VoteIncrement};
