use thiserror::Error;

/// Store access errors. `NotFound` is a normal outcome for single-row
/// lookups; everything else means the store itself misbehaved.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}
