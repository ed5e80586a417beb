#[cfg(feature = "postgres")]
use sea_orm::DbErr;

/// Error type for connection, migration and health operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("Could not connect after {attempts} attempt(s): {source}")]
    ConnectionFailed {
        attempts: u32,
        #[source]
        source: DbErr,
    },

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[cfg(feature = "postgres")]
    #[error("Migration failed: {0}")]
    Migration(#[source] DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
