use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("A chart cannot be compared against itself")]
    InvalidComparison,

    #[error("Not enough charts in the pool to build a matchup")]
    InsufficientCandidates,
}

pub type Result<T> = std::result::Result<T, StorageError>;
