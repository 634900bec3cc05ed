use axum::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i32),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    /// Envelope status for this failure.
    ///
    /// A missing item is reported like a storage failure (500).
    pub fn status(&self) -> StatusCode {
        match self {
            ItemError::NotFound(_) | ItemError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ItemError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DbErr> for ItemError {
    fn from(err: DbErr) -> Self {
        ItemError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ItemError::NotFound(1).status(), 500);
        assert_eq!(ItemError::Storage("down".into()).status(), 500);
        assert_eq!(ItemError::Validation("bad".into()).status(), 400);
    }

    #[test]
    fn test_db_error_becomes_storage() {
        let err: ItemError = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, ItemError::Storage(ref msg) if msg.contains("connection reset")));
    }
}
