//! Live Scoreboard Library
//!
//! Tracks the football matches currently in progress: start a match,
//! update its score, finish it, and read an ordered summary. Provides the
//! domain model, the match repository port with an in-memory adapter, and
//! the scoreboard service.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infrastructure;
pub mod scoreboard;

pub use domain::matches::{Match, MatchOrdering, Score, Team};
pub use errors::{ScoreboardError, ScoreboardResult};
pub use scoreboard::Scoreboard;
