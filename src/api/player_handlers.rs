use crate::api::handlers::{service_error, ApiError, AppState};
use crate::logic::PlayerService;
use crate::model::{Id, Player, PlayerRequest};
use crate::store::traits::Store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as RequestJson,
};

/// GET /api/players
pub async fn list_players<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<Player>>, ApiError> {
    PlayerService::get_all_players(&*store)
        .await
        .map(Json)
        .map_err(service_error)
}

/// GET /api/players/{id}
pub async fn get_player<S: Store>(
    Path(id): Path<Id>,
    State(store): State<AppState<S>>,
) -> Result<Json<Player>, ApiError> {
    PlayerService::get_player_by_id(&*store, id)
        .await
        .map(Json)
        .map_err(service_error)
}

/// POST /api/players
pub async fn create_player<S: Store>(
    State(store): State<AppState<S>>,
    RequestJson(req): RequestJson<PlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = PlayerService::create_player(&*store, req)
        .await
        .map_err(service_error)?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// PUT /api/players/{id}
pub async fn update_player<S: Store>(
    Path(id): Path<Id>,
    State(store): State<AppState<S>>,
    RequestJson(req): RequestJson<PlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    PlayerService::update_player(&*store, id, req)
        .await
        .map(Json)
        .map_err(service_error)
}

/// DELETE /api/players/{id}
pub async fn delete_player<S: Store>(
    Path(id): Path<Id>,
    State(store): State<AppState<S>>,
) -> Result<StatusCode, ApiError> {
    PlayerService::delete_player(&*store, id)
        .await
        .map_err(service_error)?;
    Ok(StatusCode::NO_CONTENT)
}
