use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};
use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::logic::{ServiceError, TeamService, DEFAULT_PROMOTION_COUNT};
use crate::model::{Id, Team, TeamRequest};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Map a service failure onto the response the client sees
pub fn service_error(err: ServiceError) -> ApiError {
    match &err {
        ServiceError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(&err.to_string())),
        ),
        ServiceError::Store(e) => {
            error!("Store failure: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&format!("{:#}", e))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstituteQuery {
    pub institute_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionQuery {
    pub top_n: Option<usize>,
}

/// GET /api/teams
pub async fn list_teams<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    TeamService::get_all_teams(&*store)
        .await
        .map(Json)
        .map_err(service_error)
}

/// GET /api/teams/{id}
pub async fn get_team<S: Store>(
    Path(id): Path<Id>,
    State(store): State<AppState<S>>,
) -> Result<Json<Team>, ApiError> {
    TeamService::get_team_by_id(&*store, id)
        .await
        .map(Json)
        .map_err(service_error)
}

/// POST /api/teams
pub async fn create_team<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(req): RequestJson<TeamRequest>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let team = TeamService::create_team(&*store, req)
        .await
        .map_err(service_error)?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// PUT /api/teams/{id}
/// Overwrites the scalar fields only; the roster is left alone
pub async fn update_team<S: Store>(
    Path(id): Path<Id>,
    State(store): State<AppState<S>>,
    RequestJson(req): RequestJson<TeamRequest>,
) -> Result<Json<Team>, ApiError> {
    TeamService::update_team(&*store, id, req)
        .await
        .map(Json)
        .map_err(service_error)
}

/// DELETE /api/teams/{id}
pub async fn delete_team<S: Store>(
    Path(id): Path<Id>,
    State(store): State<AppState<S>>,
) -> Result<StatusCode, ApiError> {
    TeamService::delete_team(&*store, id)
        .await
        .map_err(service_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/teams/by-institute?instituteName=...
pub async fn list_teams_by_institute<S: Store>(
    Query(query): Query<InstituteQuery>,
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    TeamService::get_teams_by_institute_name(&*store, &query.institute_name)
        .await
        .map(Json)
        .map_err(service_error)
}

/// GET /api/teams/draw-sheets
pub async fn get_draw_sheets<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Vec<Team>>>, ApiError> {
    TeamService::generate_draw_sheets(&*store)
        .await
        .map(Json)
        .map_err(service_error)
}

/// GET /api/teams/promotion-results?topN=4
/// Placeholder: the first teams in storage order, not a ranking
pub async fn get_promotion_results<S: Store>(
    Query(query): Query<PromotionQuery>,
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let count = query.top_n.unwrap_or(DEFAULT_PROMOTION_COUNT);
    TeamService::get_top_teams_for_promotion(&*store, count)
        .await
        .map(Json)
        .map_err(service_error)
}
