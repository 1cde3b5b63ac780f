use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::matches::{Match, MatchKey, Team};
use crate::domain::repositories::{MatchRepository, RepositoryError, RepositoryResult};

/// In-memory implementation of MatchRepository
///
/// Keeps the match table and the busy-team index behind one mutex so a
/// save or delete updates both in a single critical section.
///
/// The busy index counts how many stored matches reference each team;
/// a team is busy while its count is non-zero.
#[derive(Debug, Default)]
pub struct InMemoryMatchRepository {
    state: Mutex<MatchTable>,
}

#[derive(Debug, Default)]
struct MatchTable {
    matches: HashMap<MatchKey, Match>,
    busy: HashMap<Team, usize>,
}

impl MatchTable {
    fn occupy(&mut self, team: &Team) {
        *self.busy.entry(team.clone()).or_insert(0) += 1;
    }

    fn release(&mut self, team: &Team) {
        if let Some(count) = self.busy.get_mut(team) {
            *count -= 1;
            if *count == 0 {
                self.busy.remove(team);
            }
        }
    }
}

impl InMemoryMatchRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, operation: &'static str) -> RepositoryResult<MutexGuard<'_, MatchTable>> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned(operation))
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn save(&self, game: &Match) -> RepositoryResult<()> {
        let mut table = self.lock("save")?;

        let replaced = table.matches.insert(game.key(), game.clone());
        if replaced.is_none() {
            table.occupy(game.home_team());
            table.occupy(game.away_team());
        }

        tracing::debug!(
            home = %game.home_team(),
            away = %game.away_team(),
            replaced = replaced.is_some(),
            "Match saved"
        );
        Ok(())
    }

    fn delete(&self, game: &Match) -> RepositoryResult<()> {
        let mut table = self.lock("delete")?;

        if let Some(removed) = table.matches.remove(&game.key()) {
            table.release(removed.home_team());
            table.release(removed.away_team());
            tracing::debug!(
                home = %removed.home_team(),
                away = %removed.away_team(),
                "Match deleted"
            );
        }

        Ok(())
    }

    fn find_by_teams(&self, home: &Team, away: &Team) -> RepositoryResult<Option<Match>> {
        let table = self.lock("find_by_teams")?;
        let key = MatchKey::new(home.clone(), away.clone());
        Ok(table.matches.get(&key).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<Match>> {
        let table = self.lock("find_all")?;
        Ok(table.matches.values().cloned().collect())
    }

    fn exists_by_team(&self, team: &Team) -> RepositoryResult<bool> {
        let table = self.lock("exists_by_team")?;
        Ok(table.busy.contains_key(team))
    }
}
