use crate::model::{Id, Player, PlayerDetails, Team, TeamDetails};
use anyhow::Result;

/// Persistence for teams. Every method persists immediately.
#[async_trait::async_trait]
pub trait TeamStore: Send + Sync {
    /// Insert a team and its initial roster, returning the stored record with fresh ids
    async fn insert_team(&self, details: TeamDetails, players: Vec<PlayerDetails>) -> Result<Team>;
    /// Get a team with its roster populated
    async fn get_team(&self, id: Id) -> Result<Option<Team>>;
    /// List all teams in storage order
    async fn list_teams(&self) -> Result<Vec<Team>>;
    /// Overwrite the scalar fields of an existing team; `None` if no such team
    async fn update_team(&self, id: Id, details: TeamDetails) -> Result<Option<Team>>;
    /// Delete a team and every player that references it
    async fn delete_team(&self, id: Id) -> Result<bool>;
    /// Exact, case-sensitive match on the stored institute name
    async fn find_teams_by_institute(&self, institute_name: &str) -> Result<Vec<Team>>;
}

/// Persistence for players.
#[async_trait::async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert a player, optionally linked to an existing team
    async fn insert_player(&self, details: PlayerDetails, team_id: Option<Id>) -> Result<Player>;
    async fn get_player(&self, id: Id) -> Result<Option<Player>>;
    async fn list_players(&self) -> Result<Vec<Player>>;
    /// Overwrite all scalar fields and the team link; `None` if no such player
    async fn update_player(
        &self,
        id: Id,
        details: PlayerDetails,
        team_id: Option<Id>,
    ) -> Result<Option<Player>>;
    async fn delete_player(&self, id: Id) -> Result<bool>;
}

pub trait Store: TeamStore + PlayerStore + Send + Sync {}

impl<T: TeamStore + PlayerStore + Send + Sync> Store for T {}
