// src/domain/errors.rs
use thiserror::Error;

/// Message used for malformed identifiers and payloads.
pub const BAD_REQUEST: &str = "Bad request";
/// Message used when an article id does not exist.
pub const ARTICLE_NOT_FOUND: &str = "article does not exist";

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn bad_request() -> Self {
        Self::Validation(BAD_REQUEST.into())
    }
}
