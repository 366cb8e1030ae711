use crate::domain::errors::{ARTICLE_NOT_FOUND, BAD_REQUEST, DomainError};

const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";

const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";
const SQLSTATE_INVALID_TEXT_REPRESENTATION: &str = "22P02";
const SQLSTATE_NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            classify(db_err.constraint(), code.as_deref())
                .unwrap_or_else(|| DomainError::Persistence(db_err.message().to_string()))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Database errors the client caused. `None` means a server-side failure.
fn classify(constraint: Option<&str>, code: Option<&str>) -> Option<DomainError> {
    match constraint {
        Some(CNT_COMMENT_AUTHOR) => return Some(DomainError::Validation(BAD_REQUEST.into())),
        Some(CNT_COMMENT_ARTICLE) => return Some(DomainError::NotFound(ARTICLE_NOT_FOUND.into())),
        _ => {}
    }

    match code? {
        SQLSTATE_FOREIGN_KEY_VIOLATION
        | SQLSTATE_INVALID_TEXT_REPRESENTATION
        | SQLSTATE_NUMERIC_VALUE_OUT_OF_RANGE => Some(DomainError::Validation(BAD_REQUEST.into())),
        _ => None,
    }
}
