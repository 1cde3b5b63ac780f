use thiserror::Error;

use crate::domain::matches::Team;
use crate::domain::repositories::RepositoryError;

/// Errors surfaced by the scoreboard
///
/// Every variant is raised before any state is touched, so a failed call
/// never leaves a partially applied change behind.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Team '{team}' is already playing in another match")]
    TeamAlreadyPlaying { team: Team },

    #[error("Match not found for teams: '{home}' vs '{away}'")]
    MatchNotFound { home: Team, away: Team },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScoreboardError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ScoreboardError::InvalidArgument(message.into())
    }
}

pub type ScoreboardResult<T> = Result<T, ScoreboardError>;
