//! Error types for the tcr-app service layer.

/// Application error type that wraps errors from the backend crates
/// and gives frontends a single error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Project(String),

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("System error: {0}")]
    System(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tcr-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<tcr_project::ProjectError> for AppError {
    fn from(err: tcr_project::ProjectError) -> Self {
        match err {
            tcr_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<tcr_system::SystemError> for AppError {
    fn from(err: tcr_system::SystemError) -> Self {
        AppError::System(err.to_string())
    }
}

impl From<tcr_sim::SimError> for AppError {
    fn from(err: tcr_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<tcr_results::ResultsError> for AppError {
    fn from(err: tcr_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
