use thiserror::Error;

#[derive(Error, Debug)]
pub enum MusterError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Import failed at line {line}: {reason}")]
    Import { line: usize, reason: String },

    #[error("Select a role or at least one skill before searching")]
    EmptyRequirement,

    #[error("Select at least one candidate before assigning a mission")]
    NoCandidatesSelected,

    #[error("Personnel '{id}' not found")]
    PersonnelNotFound { id: String },

    #[error("Access to section '{section}' denied")]
    PermissionDenied { section: String },

    #[error("No authenticated user")]
    NotAuthenticated,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Unsupported backup version '{version}'")]
    UnsupportedBackupVersion { version: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type MusterResult<T> = Result<T, MusterError>;
