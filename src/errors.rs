use thiserror::Error;

/// Fatal startup faults. None of these are retried; the process logs the
/// error and exits non-zero.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid PORT value {0:?}: expected a port number")]
    InvalidPort(String),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),

    #[error("server terminated unexpectedly: {0}")]
    Serve(std::io::Error),
}
