pub mod entity;
pub mod repository;

pub use entity::Topic;
pub use repository::TopicRepository;
