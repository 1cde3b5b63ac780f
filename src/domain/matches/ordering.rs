use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use super::football_match::Match;
use crate::errors::ScoreboardError;

type CompareFn = dyn Fn(&Match, &Match) -> Ordering + Send + Sync;

/// Comparison rule used to order the scoreboard summary
///
/// Any total order over matches can be plugged in through [`MatchOrdering::new`].
/// The default rule ranks by total score descending, then by start time
/// descending so the most recently started match comes first.
///
/// # Example
/// ```
/// use live_scoreboard::domain::matches::MatchOrdering;
///
/// let by_home_score = MatchOrdering::new(|a, b| b.home_score().cmp(&a.home_score()));
/// # let _ = by_home_score;
/// ```
#[derive(Clone)]
pub struct MatchOrdering {
    name: &'static str,
    compare: Arc<CompareFn>,
}

impl MatchOrdering {
    /// Wraps a custom comparison rule
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&Match, &Match) -> Ordering + Send + Sync + 'static,
    {
        Self::named("custom", compare)
    }

    fn named<F>(name: &'static str, compare: F) -> Self
    where
        F: Fn(&Match, &Match) -> Ordering + Send + Sync + 'static,
    {
        Self {
            name,
            compare: Arc::new(compare),
        }
    }

    /// Total score descending, then most recently started first
    pub fn total_score_then_recency() -> Self {
        Self::named("total-score", |a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| b.started_at().cmp(&a.started_at()))
        })
    }

    /// Home team name ascending
    pub fn home_team_alphabetical() -> Self {
        Self::named("home-team", |a, b| a.home_team().cmp(b.home_team()))
    }

    /// Away team name ascending, then home score descending
    pub fn away_team_then_home_score_desc() -> Self {
        Self::named("away-team", |a, b| {
            a.away_team()
                .cmp(b.away_team())
                .then_with(|| b.home_score().cmp(&a.home_score()))
        })
    }

    pub fn compare(&self, a: &Match, b: &Match) -> Ordering {
        (self.compare)(a, b)
    }

    /// Sorts `matches` in place according to this rule
    pub fn sort(&self, matches: &mut [Match]) {
        matches.sort_by(|a, b| self.compare(a, b));
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for MatchOrdering {
    fn default() -> Self {
        Self::total_score_then_recency()
    }
}

impl fmt::Debug for MatchOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchOrdering").field("name", &self.name).finish()
    }
}

impl FromStr for MatchOrdering {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "total-score" => Ok(Self::total_score_then_recency()),
            "home-team" => Ok(Self::home_team_alphabetical()),
            "away-team" => Ok(Self::away_team_then_home_score_desc()),
            other => Err(ScoreboardError::Config(format!(
                "Unknown summary ordering '{}' (expected total-score, home-team or away-team)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matches::{Score, Team};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn kickoff(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 14, 18, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn game(home: &str, away: &str, score: (i32, i32), minutes: i64) -> Match {
        let mut game = Match::with_start_time(
            Team::new(home).unwrap(),
            Team::new(away).unwrap(),
            kickoff(minutes),
        )
        .unwrap();
        game.update_score(Score::new(score.0, score.1).unwrap());
        game
    }

    fn home_names(matches: &[Match]) -> Vec<&str> {
        matches.iter().map(|m| m.home_team().name()).collect()
    }

    #[test]
    fn default_orders_by_total_then_recency() {
        let mut matches = vec![
            game("A", "a", (6, 6), 1),
            game("B", "b", (10, 2), 2),
            game("C", "c", (3, 2), 3),
            game("D", "d", (2, 2), 4),
            game("E", "e", (1, 3), 5),
        ];

        MatchOrdering::default().sort(&mut matches);

        assert_eq!(home_names(&matches), vec!["B", "A", "C", "E", "D"]);
    }

    #[test]
    fn equal_totals_put_latest_start_first() {
        let older = game("Old", "x", (1, 1), 0);
        let newer = game("New", "y", (2, 0), 30);

        let ordering = MatchOrdering::total_score_then_recency();

        assert_eq!(ordering.compare(&newer, &older), Ordering::Less);
        assert_eq!(ordering.compare(&older, &newer), Ordering::Greater);
    }

    #[test]
    fn home_team_alphabetical_ordering() {
        let mut matches = vec![
            game("France", "Australia", (4, 1), 2),
            game("Brazil", "Croatia", (3, 1), 0),
            game("Argentina", "Nigeria", (2, 1), 1),
        ];

        MatchOrdering::home_team_alphabetical().sort(&mut matches);

        assert_eq!(home_names(&matches), vec!["Argentina", "Brazil", "France"]);
    }

    #[test]
    fn away_team_then_home_score_ordering() {
        let mut matches = vec![
            game("Spain", "Portugal", (3, 2), 0),
            game("Italy", "France", (1, 1), 1),
            game("Germany", "England", (2, 0), 2),
            game("Wales", "France", (4, 0), 3),
        ];

        MatchOrdering::away_team_then_home_score_desc().sort(&mut matches);

        assert_eq!(
            home_names(&matches),
            vec!["Germany", "Wales", "Italy", "Spain"]
        );
    }

    #[test]
    fn custom_ordering() {
        let mut matches = vec![game("A", "a", (0, 1), 0), game("B", "b", (0, 9), 1)];

        let ordering = MatchOrdering::new(|a, b| b.away_score().cmp(&a.away_score()));
        ordering.sort(&mut matches);

        assert_eq!(home_names(&matches), vec!["B", "A"]);
        assert_eq!(ordering.name(), "custom");
    }

    #[test]
    fn parse_known_orderings() {
        assert_eq!(
            "total-score".parse::<MatchOrdering>().unwrap().name(),
            "total-score"
        );
        assert_eq!(
            "home-team".parse::<MatchOrdering>().unwrap().name(),
            "home-team"
        );
        assert_eq!(
            "away-team".parse::<MatchOrdering>().unwrap().name(),
            "away-team"
        );
    }

    #[test]
    fn parse_unknown_ordering_fails() {
        assert!(matches!(
            "alphabetical".parse::<MatchOrdering>(),
            Err(ScoreboardError::Config(_))
        ));
    }
}
