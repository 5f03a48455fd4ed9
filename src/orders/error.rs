use thiserror::Error;

/// Storage-path failure: connectivity loss, constraint violation, decode fault.
///
/// Never handled below the HTTP boundary, only propagated upward.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
