use anyhow::{bail, Context, Result};
use itertools::Itertools;
use sqlx::{
    postgres::{PgPoolOptions, PgRow},
    PgPool, Row,
};
use std::collections::HashMap;

use crate::model::{Id, Player, PlayerDetails, RosterPlayer, Team, TeamDetails, TeamSummary};
use crate::store::traits::{PlayerStore, TeamStore};

const TEAM_COLUMNS: &str = "id, team_name, institute_name, captain, vice_captain";

const ROSTER_COLUMNS: &str =
    "id, name, registration_number, branch, section, year, mobile_number, team_id";

const PLAYER_SELECT: &str = r#"
    SELECT p.id, p.name, p.registration_number, p.branch, p.section, p.year, p.mobile_number,
           p.team_id, t.team_name, t.institute_name, t.captain, t.vice_captain
    FROM players p
    LEFT JOIN teams t ON t.id = p.team_id
"#;

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Run the embedded schema migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    /// Load the rosters of the given teams, keyed by team id
    async fn rosters_for(&self, team_ids: &[Id]) -> Result<HashMap<Id, Vec<RosterPlayer>>> {
        if team_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query(&format!(
            "SELECT {} FROM players WHERE team_id = ANY($1) ORDER BY id",
            ROSTER_COLUMNS
        ))
        .bind(team_ids.to_vec())
        .fetch_all(&self.pool)
        .await
        .context("Failed to load team rosters")?;

        Ok(rows
            .iter()
            .map(|row| {
                let team_id: Id = row.get("team_id");
                (team_id, roster_player_from_row(row))
            })
            .into_group_map())
    }

    /// Attach rosters to a set of team rows, keeping the row order
    async fn assemble_teams(&self, rows: Vec<PgRow>) -> Result<Vec<Team>> {
        let ids: Vec<Id> = rows.iter().map(|row| row.get("id")).collect();
        let mut rosters = self.rosters_for(&ids).await?;

        Ok(rows
            .iter()
            .map(|row| {
                let id: Id = row.get("id");
                Team {
                    id,
                    details: team_details_from_row(row),
                    players: rosters.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }
}

fn team_details_from_row(row: &PgRow) -> TeamDetails {
    TeamDetails {
        team_name: row.get("team_name"),
        institute_name: row.get("institute_name"),
        captain: row.get("captain"),
        vice_captain: row.get("vice_captain"),
    }
}

fn player_details_from_row(row: &PgRow) -> PlayerDetails {
    PlayerDetails {
        name: row.get("name"),
        registration_number: row.get("registration_number"),
        branch: row.get("branch"),
        section: row.get("section"),
        year: row.get("year"),
        mobile_number: row.get("mobile_number"),
    }
}

fn roster_player_from_row(row: &PgRow) -> RosterPlayer {
    RosterPlayer {
        id: row.get("id"),
        details: player_details_from_row(row),
    }
}

fn player_from_row(row: &PgRow) -> Player {
    let team_id: Option<Id> = row.get("team_id");
    Player {
        id: row.get("id"),
        details: player_details_from_row(row),
        team: team_id.map(|id| TeamSummary {
            id,
            details: team_details_from_row(row),
        }),
    }
}

#[async_trait::async_trait]
impl TeamStore for PostgresStore {
    async fn insert_team(&self, details: TeamDetails, players: Vec<PlayerDetails>) -> Result<Team> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let team_id: Id = sqlx::query(
            r#"
            INSERT INTO teams (team_name, institute_name, captain, vice_captain)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&details.team_name)
        .bind(&details.institute_name)
        .bind(&details.captain)
        .bind(&details.vice_captain)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to insert team")?
        .get("id");

        for player in &players {
            sqlx::query(
                r#"
                INSERT INTO players
                    (name, registration_number, branch, section, year, mobile_number, team_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(&player.name)
            .bind(&player.registration_number)
            .bind(&player.branch)
            .bind(&player.section)
            .bind(&player.year)
            .bind(&player.mobile_number)
            .bind(team_id)
            .execute(&mut *tx)
            .await
            .context("Failed to insert team roster")?;
        }

        tx.commit().await.context("Failed to commit team insert")?;

        match self.get_team(team_id).await? {
            Some(team) => Ok(team),
            None => bail!("Team {} not found after insert", team_id),
        }
    }

    async fn get_team(&self, id: Id) -> Result<Option<Team>> {
        let row = sqlx::query(&format!("SELECT {} FROM teams WHERE id = $1", TEAM_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch team")?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.assemble_teams(vec![row]).await?.pop())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let rows = sqlx::query(&format!("SELECT {} FROM teams ORDER BY id", TEAM_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .context("Failed to list teams")?;

        self.assemble_teams(rows).await
    }

    async fn update_team(&self, id: Id, details: TeamDetails) -> Result<Option<Team>> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET team_name = $1, institute_name = $2, captain = $3, vice_captain = $4
            WHERE id = $5
            "#,
        )
        .bind(&details.team_name)
        .bind(&details.institute_name)
        .bind(&details.captain)
        .bind(&details.vice_captain)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to update team")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_team(id).await
    }

    async fn delete_team(&self, id: Id) -> Result<bool> {
        // players go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete team")?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_teams_by_institute(&self, institute_name: &str) -> Result<Vec<Team>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM teams WHERE institute_name = $1 ORDER BY id",
            TEAM_COLUMNS
        ))
        .bind(institute_name)
        .fetch_all(&self.pool)
        .await
        .context("Failed to find teams by institute")?;

        self.assemble_teams(rows).await
    }
}

#[async_trait::async_trait]
impl PlayerStore for PostgresStore {
    async fn insert_player(&self, details: PlayerDetails, team_id: Option<Id>) -> Result<Player> {
        let id: Id = sqlx::query(
            r#"
            INSERT INTO players
                (name, registration_number, branch, section, year, mobile_number, team_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&details.name)
        .bind(&details.registration_number)
        .bind(&details.branch)
        .bind(&details.section)
        .bind(&details.year)
        .bind(&details.mobile_number)
        .bind(team_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert player")?
        .get("id");

        match self.get_player(id).await? {
            Some(player) => Ok(player),
            None => bail!("Player {} not found after insert", id),
        }
    }

    async fn get_player(&self, id: Id) -> Result<Option<Player>> {
        let row = sqlx::query(&format!("{} WHERE p.id = $1", PLAYER_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch player")?;

        Ok(row.as_ref().map(player_from_row))
    }

    async fn list_players(&self) -> Result<Vec<Player>> {
        let rows = sqlx::query(&format!("{} ORDER BY p.id", PLAYER_SELECT))
            .fetch_all(&self.pool)
            .await
            .context("Failed to list players")?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    async fn update_player(
        &self,
        id: Id,
        details: PlayerDetails,
        team_id: Option<Id>,
    ) -> Result<Option<Player>> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = $1, registration_number = $2, branch = $3, section = $4,
                year = $5, mobile_number = $6, team_id = $7
            WHERE id = $8
            "#,
        )
        .bind(&details.name)
        .bind(&details.registration_number)
        .bind(&details.branch)
        .bind(&details.section)
        .bind(&details.year)
        .bind(&details.mobile_number)
        .bind(team_id)
        .bind(id)
        .execute(&self.pool)
        .await
        .context("Failed to update player")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_player(id).await
    }

    async fn delete_player(&self, id: Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete player")?;

        Ok(result.rows_affected() > 0)
    }
}
