use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::bad_request())
        } else {
            Ok(Self(id))
        }
    }
}

impl FromStr for ArticleId {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::bad_request())?;
        Self::new(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Signed change applied to an article's vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteIncrement(i32);

impl VoteIncrement {
    pub fn new(delta: i64) -> DomainResult<Self> {
        i32::try_from(delta)
            .map(Self)
            .map_err(|_| DomainError::bad_request())
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}
