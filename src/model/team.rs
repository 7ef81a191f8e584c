use crate::model::common::null_as_default;
use crate::model::{Id, PlayerDetails, RosterPlayer};
use serde::{Deserialize, Serialize};

/// The four free-form scalar fields of a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetails {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub institute_name: Option<String>,
    #[serde(default)]
    pub captain: Option<String>,
    #[serde(default)]
    pub vice_captain: Option<String>,
}

impl TeamDetails {
    pub fn new(team_name: &str, institute_name: &str, captain: &str, vice_captain: &str) -> Self {
        Self {
            team_name: Some(team_name.to_string()),
            institute_name: Some(institute_name.to_string()),
            captain: Some(captain.to_string()),
            vice_captain: Some(vice_captain.to_string()),
        }
    }
}

/// A team with its roster populated. Roster entries carry no back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Id,
    #[serde(flatten)]
    pub details: TeamDetails,
    #[serde(default)]
    pub players: Vec<RosterPlayer>,
}

impl Team {
    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id,
            details: self.details.clone(),
        }
    }
}

/// A team as embedded inside a player: scalars only, no roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: Id,
    #[serde(flatten)]
    pub details: TeamDetails,
}

/// Body of `POST`/`PUT /api/teams`. A client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamRequest {
    #[serde(flatten)]
    pub details: TeamDetails,
    /// Only honoured on create; updates never replace the roster.
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: Vec<PlayerDetails>,
}

impl TeamRequest {
    pub fn new(details: TeamDetails) -> Self {
        Self {
            details,
            players: Vec::new(),
        }
    }

    pub fn with_players(mut self, players: Vec<PlayerDetails>) -> Self {
        self.players = players;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn team_serializes_camel_case_with_roster() {
        let team = Team {
            id: 1,
            details: TeamDetails::new("Strikers", "Alpha College", "R. Singh", "M. Rao"),
            players: vec![RosterPlayer {
                id: 10,
                details: PlayerDetails {
                    name: Some("A. Kumar".to_string()),
                    ..Default::default()
                },
            }],
        };

        let value = serde_json::to_value(&team).unwrap();
        assert_eq!(value["teamName"], "Strikers");
        assert_eq!(value["instituteName"], "Alpha College");
        assert_eq!(value["viceCaptain"], "M. Rao");
        assert_eq!(value["players"][0]["name"], "A. Kumar");
        assert!(value["players"][0].get("team").is_none());
    }

    #[test]
    fn team_request_ignores_client_id_and_tolerates_missing_fields() {
        let req: TeamRequest = serde_json::from_value(json!({
            "id": 99,
            "teamName": "Strikers",
            "instituteName": null
        }))
        .unwrap();

        assert_eq!(req.details.team_name.as_deref(), Some("Strikers"));
        assert_eq!(req.details.institute_name, None);
        assert_eq!(req.details.captain, None);
        assert!(req.players.is_empty());
    }

    #[test]
    fn team_request_treats_null_roster_as_empty() {
        let req: TeamRequest = serde_json::from_value(json!({
            "teamName": "Strikers",
            "players": null
        }))
        .unwrap();
        assert!(req.players.is_empty());

        let req: TeamRequest = serde_json::from_value(json!({
            "teamName": "Strikers",
            "players": [{ "name": "A. Kumar" }]
        }))
        .unwrap();
        assert_eq!(req.players, vec![PlayerDetails::named("A. Kumar")]);
    }
}
