use log::{debug, info};

use crate::logic::error::{RecordKind, ServiceError, ServiceResult};
use crate::logic::pools::{partition_into_pools, take_top, POOL_SIZE};
use crate::model::{Id, Team, TeamRequest};
use crate::store::traits::Store;

/// Team operations over whichever store the caller passes in.
pub struct TeamService;

impl TeamService {
    pub async fn get_all_teams<S: Store>(store: &S) -> ServiceResult<Vec<Team>> {
        Ok(store.list_teams().await?)
    }

    pub async fn get_team_by_id<S: Store>(store: &S, id: Id) -> ServiceResult<Team> {
        match store.get_team(id).await? {
            Some(team) => Ok(team),
            None => {
                debug!("Team {} not found", id);
                Err(ServiceError::not_found(RecordKind::Team, id))
            }
        }
    }

    /// Persist a new team together with any roster supplied in the request.
    pub async fn create_team<S: Store>(store: &S, request: TeamRequest) -> ServiceResult<Team> {
        let team = store.insert_team(request.details, request.players).await?;
        info!(
            "Created team {} ({:?}) with {} players",
            team.id,
            team.details.team_name,
            team.players.len()
        );
        Ok(team)
    }

    /// Overwrite the four scalar fields. The roster in `request` is ignored.
    pub async fn update_team<S: Store>(
        store: &S,
        id: Id,
        request: TeamRequest,
    ) -> ServiceResult<Team> {
        let existing = Self::get_team_by_id(store, id).await?;

        match store.update_team(existing.id, request.details).await? {
            Some(team) => {
                info!("Updated team {}", id);
                Ok(team)
            }
            // deleted between the read and the write
            None => Err(ServiceError::not_found(RecordKind::Team, id)),
        }
    }

    /// Delete a team and its players. Deleting an unknown id is not an error.
    pub async fn delete_team<S: Store>(store: &S, id: Id) -> ServiceResult<()> {
        if store.delete_team(id).await? {
            info!("Deleted team {} and its players", id);
        } else {
            debug!("Delete of unknown team {} ignored", id);
        }
        Ok(())
    }

    pub async fn get_teams_by_institute_name<S: Store>(
        store: &S,
        institute_name: &str,
    ) -> ServiceResult<Vec<Team>> {
        Ok(store.find_teams_by_institute(institute_name).await?)
    }

    /// Batch all teams into pools of [`POOL_SIZE`] in store enumeration order.
    pub async fn generate_draw_sheets<S: Store>(store: &S) -> ServiceResult<Vec<Vec<Team>>> {
        let teams = store.list_teams().await?;
        Ok(partition_into_pools(teams, POOL_SIZE))
    }

    /// First `count` teams in store enumeration order. This is a placeholder
    /// selection with no scoring behind it.
    pub async fn get_top_teams_for_promotion<S: Store>(
        store: &S,
        count: usize,
    ) -> ServiceResult<Vec<Team>> {
        let teams = store.list_teams().await?;
        Ok(take_top(teams, count))
    }
}
