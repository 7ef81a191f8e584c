use cricket_championship::routes::create_app;
use cricket_championship::MemoryStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

// Test client wrapper for making API calls
struct TestClient {
    client: Client,
    base_url: String,
}

impl TestClient {
    /// Serve a fresh in-memory registration API on an ephemeral port
    async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_app(Arc::new(MemoryStore::new()), None);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{}", addr),
        }
    }

    async fn post(&self, path: &str, json: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
            .unwrap()
    }

    async fn put(&self, path: &str, json: Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
            .unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    async fn get_json(&self, path: &str) -> Value {
        let response = self.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", path);
        response.json().await.unwrap()
    }

    async fn create_team(&self, name: &str, institute: &str) -> Value {
        let response = self
            .post(
                "/api/teams",
                json!({
                    "teamName": name,
                    "instituteName": institute,
                    "captain": format!("{} captain", name),
                    "viceCaptain": format!("{} vice", name)
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json().await.unwrap()
    }
}

fn team_names(teams: &Value) -> Vec<String> {
    teams
        .as_array()
        .unwrap()
        .iter()
        .map(|team| team["teamName"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_team_and_player_registration_workflow() {
    let client = TestClient::spawn().await;

    // 1. Create a team; the id is assigned by the server
    let team = client
        .post(
            "/api/teams",
            json!({
                "id": 500,
                "teamName": "Strikers",
                "instituteName": "Alpha College",
                "captain": "R. Singh"
            }),
        )
        .await;
    assert_eq!(team.status(), StatusCode::CREATED);
    let team: Value = team.json().await.unwrap();
    let team_id = team["id"].as_i64().unwrap();
    assert_ne!(team_id, 500);
    assert_eq!(team["teamName"], "Strikers");
    assert_eq!(team["instituteName"], "Alpha College");
    assert_eq!(team["captain"], "R. Singh");
    assert!(team["viceCaptain"].is_null());
    assert_eq!(team["players"], json!([]));

    // 2. Register a player against it, echoing the team object like the front end does
    let player = client
        .post(
            "/api/players",
            json!({
                "name": "A. Kumar",
                "registrationNumber": "22EC042",
                "branch": "ECE",
                "section": "B",
                "year": "2",
                "mobileNumber": "9876543210",
                "team": { "id": team_id }
            }),
        )
        .await;
    assert_eq!(player.status(), StatusCode::CREATED);
    let player: Value = player.json().await.unwrap();
    let player_id = player["id"].as_i64().unwrap();
    assert_eq!(player["team"]["id"], team_id);
    assert_eq!(player["team"]["teamName"], "Strikers");
    assert!(player["team"].get("players").is_none());

    // 3. The team now lists the player, without a back-reference
    let fetched = client.get_json(&format!("/api/teams/{}", team_id)).await;
    let roster = fetched["players"].as_array().unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0]["id"], player_id);
    assert_eq!(roster[0]["registrationNumber"], "22EC042");
    assert!(roster[0].get("team").is_none());

    // 4. Updating the team overwrites scalars and keeps the roster
    let updated = client
        .put(
            &format!("/api/teams/{}", team_id),
            json!({
                "teamName": "Super Strikers",
                "instituteName": "Alpha College",
                "captain": "M. Rao",
                "viceCaptain": "R. Singh",
                "players": []
            }),
        )
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated: Value = updated.json().await.unwrap();
    assert_eq!(updated["id"], team_id);
    assert_eq!(updated["teamName"], "Super Strikers");
    assert_eq!(updated["players"].as_array().unwrap().len(), 1);

    // 5. Player listing embeds the updated team
    let players = client.get_json("/api/players").await;
    assert_eq!(players[0]["team"]["teamName"], "Super Strikers");

    // 6. Deleting the team removes its players, and deleting again still succeeds
    let deleted = client.delete(&format!("/api/teams/{}", team_id)).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let deleted_again = client.delete(&format!("/api/teams/{}", team_id)).await;
    assert_eq!(deleted_again.status(), StatusCode::NO_CONTENT);

    let gone = client.get(&format!("/api/players/{}", player_id)).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let gone = client.get(&format!("/api/teams/{}", team_id)).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_of_unknown_team_creates_nothing() {
    let client = TestClient::spawn().await;
    client.create_team("Strikers", "Alpha College").await;

    let response = client
        .put("/api/teams/999", json!({ "teamName": "Ghost" }))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("999"));

    let teams = client.get_json("/api/teams").await;
    assert_eq!(team_names(&teams), vec!["Strikers"]);
}

#[tokio::test]
async fn test_player_update_and_unknown_team_reference() {
    let client = TestClient::spawn().await;
    let strikers = client.create_team("Strikers", "Alpha College").await;
    let titans = client.create_team("Titans", "Beta Institute").await;

    let player: Value = client
        .post(
            "/api/players",
            json!({ "name": "A. Kumar", "team": strikers["id"] }),
        )
        .await
        .json()
        .await
        .unwrap();

    let moved = client
        .put(
            &format!("/api/players/{}", player["id"]),
            json!({ "name": "A. Kumar", "year": "3", "team": { "id": titans["id"] } }),
        )
        .await;
    assert_eq!(moved.status(), StatusCode::OK);
    let moved: Value = moved.json().await.unwrap();
    assert_eq!(moved["team"]["id"], titans["id"]);
    assert_eq!(moved["year"], "3");

    let old_team = client.get_json(&format!("/api/teams/{}", strikers["id"])).await;
    assert!(old_team["players"].as_array().unwrap().is_empty());

    // a dangling team reference is refused by the store
    let dangling = client
        .post("/api/players", json!({ "name": "B. Das", "team": 12345 }))
        .await;
    assert_eq!(dangling.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let players = client.get_json("/api/players").await;
    assert_eq!(players.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_teams_by_institute_is_exact_match() {
    let client = TestClient::spawn().await;
    client.create_team("Strikers", "Alpha College").await;
    client.create_team("Chargers", "Alpha College").await;
    client.create_team("Titans", "Beta Institute").await;

    let alpha = client
        .get_json("/api/teams/by-institute?instituteName=Alpha%20College")
        .await;
    assert_eq!(team_names(&alpha), vec!["Strikers", "Chargers"]);

    let lower = client
        .get_json("/api/teams/by-institute?instituteName=alpha%20college")
        .await;
    assert_eq!(lower, json!([]));

    let partial = client
        .get_json("/api/teams/by-institute?instituteName=Alpha")
        .await;
    assert_eq!(partial, json!([]));
}

#[tokio::test]
async fn test_draw_sheets_and_promotion_results() {
    let client = TestClient::spawn().await;

    assert_eq!(client.get_json("/api/teams/draw-sheets").await, json!([]));

    let mut expected = Vec::new();
    for i in 1..=10 {
        let name = format!("Team {:02}", i);
        client.create_team(&name, "Alpha College").await;
        expected.push(name);
    }

    let sheets = client.get_json("/api/teams/draw-sheets").await;
    let sheets = sheets.as_array().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].as_array().unwrap().len(), 8);
    assert_eq!(sheets[1].as_array().unwrap().len(), 2);
    let flattened: Vec<String> = sheets.iter().flat_map(team_names).collect();
    assert_eq!(flattened, expected);

    let promoted = client.get_json("/api/teams/promotion-results").await;
    assert_eq!(team_names(&promoted), expected[..4].to_vec());

    let promoted = client.get_json("/api/teams/promotion-results?topN=2").await;
    assert_eq!(team_names(&promoted), expected[..2].to_vec());

    let promoted = client.get_json("/api/teams/promotion-results?topN=50").await;
    assert_eq!(team_names(&promoted), expected);
}

#[tokio::test]
async fn test_form_style_player_bodies_are_accepted() {
    let client = TestClient::spawn().await;
    let team = client.create_team("Strikers", "Alpha College").await;
    let team_id = team["id"].as_i64().unwrap();

    // select inputs submit the team id as a string
    let created = client
        .post(
            "/api/players",
            json!({
                "name": "A. Kumar",
                "registrationNumber": "22EC042",
                "team": { "id": team_id.to_string() }
            }),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["team"]["id"], team_id);

    let cleared = client
        .put(
            &format!("/api/players/{}", created["id"]),
            json!({ "name": "A. Kumar", "team": null }),
        )
        .await;
    assert_eq!(cleared.status(), StatusCode::OK);
    let cleared: Value = cleared.json().await.unwrap();
    assert!(cleared["team"].is_null());

    let team_with_null_roster = client
        .post(
            "/api/teams",
            json!({ "teamName": "Chargers", "instituteName": "Alpha College", "players": null }),
        )
        .await;
    assert_eq!(team_with_null_roster.status(), StatusCode::CREATED);
}
