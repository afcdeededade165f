use sea_orm::{DbErr, SqlErr};
use uuid::Uuid;

pub type DaoResult<T> = Result<T, DaoLayerError>;

#[derive(Debug, thiserror::Error)]
pub enum DaoLayerError {
    #[error("database error: {0}")]
    Db(DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid pagination: page={page} page_size={page_size}")]
    InvalidPagination { page: u64, page_size: u64 },
}

impl DaoLayerError {
    /// Classifies a driver error from a write, surfacing unique-constraint
    /// violations (duplicate email) as `Conflict`.
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => DaoLayerError::Conflict(message),
            _ => DaoLayerError::Db(err),
        }
    }
}
