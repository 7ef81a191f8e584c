use log::{debug, info};

use crate::logic::error::{RecordKind, ServiceError, ServiceResult};
use crate::model::{Id, Player, PlayerRequest};
use crate::store::traits::Store;

pub struct PlayerService;

impl PlayerService {
    pub async fn get_all_players<S: Store>(store: &S) -> ServiceResult<Vec<Player>> {
        Ok(store.list_players().await?)
    }

    pub async fn get_player_by_id<S: Store>(store: &S, id: Id) -> ServiceResult<Player> {
        match store.get_player(id).await? {
            Some(player) => Ok(player),
            None => {
                debug!("Player {} not found", id);
                Err(ServiceError::not_found(RecordKind::Player, id))
            }
        }
    }

    pub async fn create_player<S: Store>(
        store: &S,
        request: PlayerRequest,
    ) -> ServiceResult<Player> {
        let team_id = request.team_id();
        let player = store.insert_player(request.details, team_id).await?;
        info!("Created player {} (team {:?})", player.id, team_id);
        Ok(player)
    }

    /// Overwrite all six scalar fields and the team link. A request without a
    /// team unassigns the player.
    pub async fn update_player<S: Store>(
        store: &S,
        id: Id,
        request: PlayerRequest,
    ) -> ServiceResult<Player> {
        let existing = Self::get_player_by_id(store, id).await?;
        let team_id = request.team_id();

        match store
            .update_player(existing.id, request.details, team_id)
            .await?
        {
            Some(player) => {
                info!("Updated player {} (team {:?})", id, team_id);
                Ok(player)
            }
            None => Err(ServiceError::not_found(RecordKind::Player, id)),
        }
    }

    pub async fn delete_player<S: Store>(store: &S, id: Id) -> ServiceResult<()> {
        if store.delete_player(id).await? {
            info!("Deleted player {}", id);
        } else {
            debug!("Delete of unknown player {} ignored", id);
        }
        Ok(())
    }
}
