use thiserror::Error;

use crate::domain::matches::{Match, Team};

/// Errors raised by a match store
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    /// A previous holder of the store lock panicked mid-update
    #[error("Match store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for the Match aggregate
///
/// Holds the matches currently in progress, keyed by the ordered
/// (home, away) pair, and answers whether a team is busy in any of them.
///
/// # Contract
/// - `save` inserts or replaces the entry for the match's ordered pair
/// - `delete` of an absent match is a no-op, not an error
/// - A team is busy iff it appears on either side of a stored match
/// - Returned matches are snapshots; mutating them never affects the store
pub trait MatchRepository: Send + Sync {
    /// Save a match (insert or replace) and mark both teams busy
    fn save(&self, game: &Match) -> RepositoryResult<()>;

    /// Remove the match for the same ordered pair, if present
    fn delete(&self, game: &Match) -> RepositoryResult<()>;

    /// Find a match by its exact ordered team pair
    fn find_by_teams(&self, home: &Team, away: &Team) -> RepositoryResult<Option<Match>>;

    /// Snapshot of all stored matches, in no particular order
    fn find_all(&self) -> RepositoryResult<Vec<Match>>;

    /// Whether `team` plays on either side of any stored match
    fn exists_by_team(&self, team: &Team) -> RepositoryResult<bool>;
}
