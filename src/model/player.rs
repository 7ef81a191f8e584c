use crate::model::{Id, TeamRef, TeamSummary};
use serde::{Deserialize, Serialize};

/// The six free-form scalar fields of a player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
}

impl PlayerDetails {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

/// A player with its owning team embedded (without that team's roster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Id,
    #[serde(flatten)]
    pub details: PlayerDetails,
    #[serde(default)]
    pub team: Option<TeamSummary>,
}

impl Player {
    pub fn team_id(&self) -> Option<Id> {
        self.team.as_ref().map(|team| team.id)
    }

    pub fn to_roster(&self) -> RosterPlayer {
        RosterPlayer {
            id: self.id,
            details: self.details.clone(),
        }
    }
}

/// A player as listed inside its team: no back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: Id,
    #[serde(flatten)]
    pub details: PlayerDetails,
}

/// Body of `POST`/`PUT /api/players`. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRequest {
    #[serde(flatten)]
    pub details: PlayerDetails,
    #[serde(default)]
    pub team: Option<TeamRef>,
}

impl PlayerRequest {
    pub fn new(details: PlayerDetails, team_id: Option<Id>) -> Self {
        Self {
            details,
            team: team_id.map(TeamRef::from),
        }
    }

    pub fn team_id(&self) -> Option<Id> {
        self.team.map(|team| team.id())
    }
}
