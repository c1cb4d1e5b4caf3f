use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use matchpoint_core::repository::RecordedSearch;
use matchpoint_core::tournament::Tournament;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const RECENT_SEARCH_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub favorites: Vec<Tournament>,
    pub stats: DashboardStats,
    pub recent_searches: Vec<RecordedSearch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub favorite_count: usize,
    pub search_count: usize,
    pub upcoming_tournaments: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub tournament_id: Uuid,
}

/// GET /v1/players/{id}/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let favorites = state
        .favorites
        .list_favorites(player_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    let recent_searches = state
        .favorites
        .recent_searches(player_id, RECENT_SEARCH_LIMIT)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    let today = chrono::Utc::now().date_naive();
    let upcoming_tournaments = favorites.iter().filter(|t| t.start_date > today).count();

    let stats = DashboardStats {
        favorite_count: favorites.len(),
        search_count: recent_searches.len(),
        upcoming_tournaments,
    };

    Ok(Json(DashboardResponse {
        favorites,
        stats,
        recent_searches,
    }))
}

/// POST /v1/players/{id}/favorites
pub async fn add_favorite(
    State(state): State<AppState>,
    Path(player_id): Path<Uuid>,
    Json(req): Json<AddFavoriteRequest>,
) -> Result<StatusCode, AppError> {
    // Reject favorites for tournaments that are not in the catalog.
    state
        .tournaments
        .get(req.tournament_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| {
            AppError::NotFoundError(format!("Tournament {} not found", req.tournament_id))
        })?;

    state
        .favorites
        .add_favorite(player_id, req.tournament_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(StatusCode::CREATED)
}

/// DELETE /v1/players/{id}/favorites/{tournament_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((player_id, tournament_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    state
        .favorites
        .remove_favorite(player_id, tournament_id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(StatusCode::NO_CONTENT)
}
