use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::model::{Id, Player, PlayerDetails, RosterPlayer, Team, TeamDetails, TeamSummary};
use crate::store::traits::{PlayerStore, TeamStore};

#[derive(Debug, Clone)]
struct PlayerRow {
    details: PlayerDetails,
    team_id: Option<Id>,
}

#[derive(Debug, Default)]
struct Tables {
    teams: BTreeMap<Id, TeamDetails>,
    players: BTreeMap<Id, PlayerRow>,
    last_team_id: Id,
    last_player_id: Id,
}

impl Tables {
    fn next_team_id(&mut self) -> Id {
        self.last_team_id += 1;
        self.last_team_id
    }

    fn next_player_id(&mut self) -> Id {
        self.last_player_id += 1;
        self.last_player_id
    }

    fn ensure_team_exists(&self, team_id: Option<Id>) -> Result<()> {
        if let Some(team_id) = team_id {
            if !self.teams.contains_key(&team_id) {
                bail!("Team {} does not exist", team_id);
            }
        }
        Ok(())
    }

    fn team(&self, id: Id) -> Option<Team> {
        let details = self.teams.get(&id)?;
        let players = self
            .players
            .iter()
            .filter(|(_, row)| row.team_id == Some(id))
            .map(|(player_id, row)| RosterPlayer {
                id: *player_id,
                details: row.details.clone(),
            })
            .collect();

        Some(Team {
            id,
            details: details.clone(),
            players,
        })
    }

    fn player(&self, id: Id) -> Option<Player> {
        let row = self.players.get(&id)?;
        let team = row.team_id.and_then(|team_id| {
            self.teams.get(&team_id).map(|details| TeamSummary {
                id: team_id,
                details: details.clone(),
            })
        });

        Some(Player {
            id,
            details: row.details.clone(),
            team,
        })
    }
}

/// Process-local store with the same contract as [`crate::store::PostgresStore`].
///
/// Ids are assigned from per-kind counters that never reuse a value, and
/// listings come back in ascending id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TeamStore for MemoryStore {
    async fn insert_team(&self, details: TeamDetails, players: Vec<PlayerDetails>) -> Result<Team> {
        let mut tables = self.tables.write();
        let id = tables.next_team_id();
        tables.teams.insert(id, details);

        for player in players {
            let player_id = tables.next_player_id();
            tables.players.insert(
                player_id,
                PlayerRow {
                    details: player,
                    team_id: Some(id),
                },
            );
        }

        match tables.team(id) {
            Some(team) => Ok(team),
            None => bail!("Team {} vanished after insert", id),
        }
    }

    async fn get_team(&self, id: Id) -> Result<Option<Team>> {
        Ok(self.tables.read().team(id))
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let tables = self.tables.read();
        Ok(tables
            .teams
            .keys()
            .filter_map(|id| tables.team(*id))
            .collect())
    }

    async fn update_team(&self, id: Id, details: TeamDetails) -> Result<Option<Team>> {
        let mut tables = self.tables.write();
        match tables.teams.get_mut(&id) {
            Some(existing) => *existing = details,
            None => return Ok(None),
        }
        Ok(tables.team(id))
    }

    async fn delete_team(&self, id: Id) -> Result<bool> {
        let mut tables = self.tables.write();
        if tables.teams.remove(&id).is_none() {
            return Ok(false);
        }
        tables.players.retain(|_, row| row.team_id != Some(id));
        Ok(true)
    }

    async fn find_teams_by_institute(&self, institute_name: &str) -> Result<Vec<Team>> {
        let tables = self.tables.read();
        Ok(tables
            .teams
            .iter()
            .filter(|(_, details)| details.institute_name.as_deref() == Some(institute_name))
            .filter_map(|(id, _)| tables.team(*id))
            .collect())
    }
}

#[async_trait::async_trait]
impl PlayerStore for MemoryStore {
    async fn insert_player(&self, details: PlayerDetails, team_id: Option<Id>) -> Result<Player> {
        let mut tables = self.tables.write();
        tables.ensure_team_exists(team_id)?;

        let id = tables.next_player_id();
        tables.players.insert(id, PlayerRow { details, team_id });

        match tables.player(id) {
            Some(player) => Ok(player),
            None => bail!("Player {} vanished after insert", id),
        }
    }

    async fn get_player(&self, id: Id) -> Result<Option<Player>> {
        Ok(self.tables.read().player(id))
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        let tables = self.tables.read();
        Ok(tables
            .players
            .keys()
            .filter_map(|id| tables.player(*id))
            .collect())
    }

    async fn update_player(
        &self,
        id: Id,
        details: PlayerDetails,
        team_id: Option<Id>,
    ) -> Result<Option<Player>> {
        let mut tables = self.tables.write();
        if !tables.players.contains_key(&id) {
            return Ok(None);
        }
        tables.ensure_team_exists(team_id)?;

        tables.players.insert(id, PlayerRow { details, team_id });
        Ok(tables.player(id))
    }

    async fn delete_player(&self, id: Id) -> Result<bool> {
        Ok(self.tables.write().players.remove(&id).is_some())
    }
}
