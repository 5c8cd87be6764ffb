use crate::debater::DebaterId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating a roster.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested debater ID does not exist in the roster.
    #[error("debater not found: {0}")]
    DebaterNotFound(DebaterId),

    /// A debater with the same name already exists.
    #[error("debater already exists: \"{0}\"")]
    DuplicateName(String),

    /// Roster data could not be parsed.
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}
