use serde::Serialize;
use std::fmt;

use crate::errors::{ScoreboardError, ScoreboardResult};

/// Team value object identified by its name
///
/// # Invariants
/// - Name must contain at least one non-whitespace character
/// - Equality is an exact, case-sensitive comparison of the name
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    /// Creates a new Team value object
    ///
    /// # Arguments
    /// * `name` - The team name, stored exactly as given
    ///
    /// # Returns
    /// * `Ok(Team)` - If the name is not blank
    /// * `Err(ScoreboardError::InvalidArgument)` - If the name is empty or whitespace
    ///
    /// # Example
    /// ```
    /// use live_scoreboard::domain::matches::Team;
    ///
    /// let team = Team::new("Brazil").expect("valid team");
    /// assert_eq!(team.name(), "Brazil");
    /// assert!(Team::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> ScoreboardResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScoreboardError::invalid("Team name cannot be empty"));
        }
        Ok(Team(name))
    }

    /// Returns the team name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score value object: goals for each side
///
/// Scores are replaced wholesale on update, never incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Score {
    home: u32,
    away: u32,
}

impl Score {
    /// Creates a score from raw caller input
    ///
    /// Negative components are rejected with `InvalidArgument`.
    ///
    /// # Example
    /// ```
    /// use live_scoreboard::domain::matches::Score;
    ///
    /// let score = Score::new(3, 1).expect("valid score");
    /// assert_eq!(score.total(), 4);
    /// assert!(Score::new(-1, 0).is_err());
    /// ```
    pub fn new(home: i32, away: i32) -> ScoreboardResult<Self> {
        match (u32::try_from(home), u32::try_from(away)) {
            (Ok(home), Ok(away)) => Ok(Score { home, away }),
            _ => Err(ScoreboardError::invalid("Scores cannot be negative")),
        }
    }

    /// The 0 - 0 score every match starts with
    pub fn initial() -> Self {
        Score::default()
    }

    pub fn home(&self) -> u32 {
        self.home
    }

    pub fn away(&self) -> u32 {
        self.away
    }

    /// Sum of both sides
    pub fn total(&self) -> u64 {
        u64::from(self.home) + u64::from(self.away)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Storage key of a match: the ordered (home, away) pair
///
/// `Brazil vs Germany` and `Germany vs Brazil` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub home: Team,
    pub away: Team,
}

impl MatchKey {
    pub fn new(home: Team, away: Team) -> Self {
        Self { home, away }
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_team_name() {
        let team = Team::new("Spain").unwrap();
        assert_eq!(team.name(), "Spain");
    }

    #[test]
    fn team_name_is_kept_verbatim() {
        let team = Team::new(" Spain ").unwrap();
        assert_eq!(team.name(), " Spain ");
    }

    #[test]
    fn invalid_team_name_empty() {
        assert!(matches!(
            Team::new(""),
            Err(ScoreboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn invalid_team_name_blank() {
        assert!(Team::new(" \t\n").is_err());
    }

    #[test]
    fn team_equality_by_name() {
        assert_eq!(Team::new("Brazil").unwrap(), Team::new("Brazil").unwrap());
        assert_ne!(Team::new("Brazil").unwrap(), Team::new("Germany").unwrap());
    }

    #[test]
    fn team_equality_is_case_sensitive() {
        assert_ne!(Team::new("brazil").unwrap(), Team::new("Brazil").unwrap());
    }

    #[test]
    fn team_display() {
        assert_eq!(Team::new("Spain").unwrap().to_string(), "Spain");
    }

    #[test]
    fn valid_score() {
        let score = Score::new(2, 3).unwrap();
        assert_eq!(score.home(), 2);
        assert_eq!(score.away(), 3);
        assert_eq!(score.total(), 5);
    }

    #[test]
    fn initial_score_is_nil_nil() {
        let score = Score::initial();
        assert_eq!(score, Score::new(0, 0).unwrap());
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn negative_home_score_fails() {
        assert!(matches!(
            Score::new(-1, 0),
            Err(ScoreboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_away_score_fails() {
        assert!(Score::new(0, -3).is_err());
    }

    #[test]
    fn total_does_not_overflow() {
        let score = Score::new(i32::MAX, i32::MAX).unwrap();
        assert_eq!(score.total(), 2 * i32::MAX as u64);
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(10, 2).unwrap().to_string(), "10 - 2");
    }

    #[test]
    fn match_key_is_ordered() {
        let brazil = Team::new("Brazil").unwrap();
        let germany = Team::new("Germany").unwrap();

        let forward = MatchKey::new(brazil.clone(), germany.clone());
        let reverse = MatchKey::new(germany, brazil);

        assert_ne!(forward, reverse);
        assert_eq!(forward.to_string(), "Brazil - Germany");
    }
}
