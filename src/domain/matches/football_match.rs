use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::value_objects::{MatchKey, Score, Team};
use crate::errors::{ScoreboardError, ScoreboardResult};

/// Match aggregate root
///
/// A football match in progress between two teams.
///
/// # Invariants
/// - Home and away teams are distinct
/// - Teams are fixed at creation, only the score changes
/// - Identity is the ordered (home, away) pair; score and start time
///   take no part in equality
///
/// # Example
/// ```
/// use live_scoreboard::domain::matches::{Match, Score, Team};
///
/// let mut game = Match::new(
///     Team::new("Spain").unwrap(),
///     Team::new("Brazil").unwrap(),
/// ).expect("valid match");
///
/// game.update_score(Score::new(10, 2).unwrap());
/// assert_eq!(game.to_string(), "Spain 10 - 2 Brazil");
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    home_team: Team,
    away_team: Team,
    score: Score,
    started_at: DateTime<Utc>,
}

impl Match {
    /// Creates a new match starting now with a 0 - 0 score
    pub fn new(home_team: Team, away_team: Team) -> ScoreboardResult<Self> {
        Self::with_start_time(home_team, away_team, Utc::now())
    }

    /// Creates a new match with an explicit start time
    ///
    /// # Returns
    /// * `Err(ScoreboardError::InvalidArgument)` - If both sides are the same team
    pub fn with_start_time(
        home_team: Team,
        away_team: Team,
        started_at: DateTime<Utc>,
    ) -> ScoreboardResult<Self> {
        if home_team == away_team {
            return Err(ScoreboardError::invalid(
                "Home team and away team cannot be the same",
            ));
        }

        Ok(Self {
            home_team,
            away_team,
            score: Score::initial(),
            started_at,
        })
    }

    /// Replaces the current score (absolute, not cumulative)
    pub fn update_score(&mut self, score: Score) {
        self.score = score;
    }

    // ===== Getters =====

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn home_score(&self) -> u32 {
        self.score.home()
    }

    pub fn away_score(&self) -> u32 {
        self.score.away()
    }

    pub fn total_score(&self) -> u64 {
        self.score.total()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whether `team` plays on either side of this match
    pub fn involves(&self, team: &Team) -> bool {
        &self.home_team == team || &self.away_team == team
    }

    /// Returns the ordered storage key of this match
    pub fn key(&self) -> MatchKey {
        MatchKey::new(self.home_team.clone(), self.away_team.clone())
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.home_team == other.home_team && self.away_team == other.away_team
    }
}

impl Eq for Match {}

impl Hash for Match {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.home_team.hash(state);
        self.away_team.hash(state);
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team,
            self.score.home(),
            self.score.away(),
            self.away_team
        )
    }
}

impl Serialize for Match {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Match", 6)?;
        state.serialize_field("home_team", &self.home_team)?;
        state.serialize_field("away_team", &self.away_team)?;
        state.serialize_field("home_score", &self.score.home())?;
        state.serialize_field("away_score", &self.score.away())?;
        state.serialize_field("total_score", &self.score.total())?;
        state.serialize_field("started_at", &self.started_at)?;
        state.end()
    }
}
