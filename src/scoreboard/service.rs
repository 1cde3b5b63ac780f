use std::sync::Arc;

use super::clock::StartClock;
use crate::domain::matches::{Match, MatchOrdering, Score, Team};
use crate::domain::repositories::MatchRepository;
use crate::errors::{ScoreboardError, ScoreboardResult};
use crate::infrastructure::repositories::InMemoryMatchRepository;

/// Live football scoreboard
///
/// Validates caller input, enforces that a team plays in at most one
/// match at a time, and produces the ordered summary. Storage is delegated
/// to the injected [`MatchRepository`]; the summary order to the injected
/// [`MatchOrdering`].
///
/// # Match lifecycle
/// ```text
/// (none) --start_match--> active --update_score--> active
///                           |                        |
///                           +------finish_match------+--> (none)
/// ```
///
/// # Example
/// ```
/// use live_scoreboard::scoreboard::Scoreboard;
///
/// let scoreboard = Scoreboard::default();
/// scoreboard.start_match("Mexico", "Canada").unwrap();
/// scoreboard.update_score("Mexico", "Canada", 0, 5).unwrap();
///
/// let summary = scoreboard.summary().unwrap();
/// assert_eq!(summary[0].to_string(), "Mexico 0 - 5 Canada");
/// ```
pub struct Scoreboard {
    repository: Arc<dyn MatchRepository>,
    ordering: MatchOrdering,
    clock: StartClock,
}

impl Scoreboard {
    /// Creates a scoreboard over an existing repository
    ///
    /// # Arguments
    /// * `repository` - Store of the matches in progress
    /// * `ordering` - Rule used to sort the summary
    pub fn new(repository: Arc<dyn MatchRepository>, ordering: MatchOrdering) -> Self {
        Self {
            repository,
            ordering,
            clock: StartClock::new(),
        }
    }

    /// Creates a scoreboard backed by a fresh in-memory repository
    pub fn in_memory(ordering: MatchOrdering) -> Self {
        Self::new(Arc::new(InMemoryMatchRepository::new()), ordering)
    }

    /// Starts a new match with a 0 - 0 score
    ///
    /// # Errors
    /// * `InvalidArgument` - A name is blank, or both names are the same team
    /// * `TeamAlreadyPlaying` - A team is already in a match; the home team is
    ///   reported when both are
    pub fn start_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<Match> {
        let home = Team::new(home_team)?;
        let away = Team::new(away_team)?;
        let game = Match::with_start_time(home, away, self.clock.next())?;

        self.ensure_available(game.home_team())?;
        self.ensure_available(game.away_team())?;

        self.repository.save(&game)?;

        tracing::info!(
            home = %game.home_team(),
            away = %game.away_team(),
            started_at = %game.started_at(),
            "Match started"
        );
        Ok(game)
    }

    /// Replaces the score of a match in progress
    ///
    /// The new score is absolute, not added to the previous one.
    ///
    /// # Errors
    /// * `InvalidArgument` - A name is blank or a score is negative
    /// * `MatchNotFound` - No match in progress for this exact home/away pair
    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        let home = Team::new(home_team)?;
        let away = Team::new(away_team)?;
        let score = Score::new(home_score, away_score)?;

        let mut game = self.find_match(home, away)?;
        game.update_score(score);
        self.repository.save(&game)?;

        tracing::debug!(
            home = %game.home_team(),
            away = %game.away_team(),
            score = %score,
            "Score updated"
        );
        Ok(())
    }

    /// Finishes a match in progress, removing it from the scoreboard
    ///
    /// # Errors
    /// * `InvalidArgument` - A name is blank
    /// * `MatchNotFound` - No match in progress for this exact home/away pair
    pub fn finish_match(&self, home_team: &str, away_team: &str) -> ScoreboardResult<()> {
        let home = Team::new(home_team)?;
        let away = Team::new(away_team)?;

        let game = self.find_match(home, away)?;
        self.repository.delete(&game)?;

        tracing::info!(
            home = %game.home_team(),
            away = %game.away_team(),
            final_score = %game.score(),
            "Match finished"
        );
        Ok(())
    }

    /// Returns all matches in progress, sorted by the configured ordering
    ///
    /// A new vector is built on every call.
    pub fn summary(&self) -> ScoreboardResult<Vec<Match>> {
        let mut matches = self.repository.find_all()?;
        self.ordering.sort(&mut matches);

        tracing::debug!(
            matches = matches.len(),
            ordering = self.ordering.name(),
            "Summary produced"
        );
        Ok(matches)
    }

    /// Returns the ordering applied by [`Scoreboard::summary`]
    pub fn ordering(&self) -> &MatchOrdering {
        &self.ordering
    }

    fn ensure_available(&self, team: &Team) -> ScoreboardResult<()> {
        if self.repository.exists_by_team(team)? {
            tracing::warn!(team = %team, "Team is already playing");
            return Err(ScoreboardError::TeamAlreadyPlaying { team: team.clone() });
        }
        Ok(())
    }

    fn find_match(&self, home: Team, away: Team) -> ScoreboardResult<Match> {
        match self.repository.find_by_teams(&home, &away)? {
            Some(game) => Ok(game),
            None => {
                tracing::warn!(home = %home, away = %away, "Match not found");
                Err(ScoreboardError::MatchNotFound { home, away })
            }
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::in_memory(MatchOrdering::default())
    }
}
