use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::api::{handlers, player_handlers};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Team management
        .route("/api/teams", get(handlers::list_teams::<S>))
        .route("/api/teams", post(handlers::create_team::<S>))
        .route("/api/teams/:id", get(handlers::get_team::<S>))
        .route("/api/teams/:id", put(handlers::update_team::<S>))
        .route("/api/teams/:id", delete(handlers::delete_team::<S>))
        // Derived team views
        .route(
            "/api/teams/by-institute",
            get(handlers::list_teams_by_institute::<S>),
        )
        .route("/api/teams/draw-sheets", get(handlers::get_draw_sheets::<S>))
        .route(
            "/api/teams/promotion-results",
            get(handlers::get_promotion_results::<S>),
        )
        // Player management
        .route("/api/players", get(player_handlers::list_players::<S>))
        .route("/api/players", post(player_handlers::create_player::<S>))
        .route("/api/players/:id", get(player_handlers::get_player::<S>))
        .route("/api/players/:id", put(player_handlers::update_player::<S>))
        .route(
            "/api/players/:id",
            delete(player_handlers::delete_player::<S>),
        )
}

/// Full application: API routes with CORS open to any origin, plus the
/// registration front end served from `static_dir` for every other path.
pub fn create_app<S: Store + 'static>(store: Arc<S>, static_dir: Option<&Path>) -> Router {
    let mut router = create_router::<S>();
    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(store)
}
