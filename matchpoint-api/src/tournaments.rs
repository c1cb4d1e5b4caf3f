use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use matchpoint_core::tournament::{Tournament, TournamentQuery};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListTournamentsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<String>,
    pub country: Option<String>,
}

/// GET /v1/tournaments
pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(query): Query<ListTournamentsQuery>,
) -> Result<Json<Vec<Tournament>>, AppError> {
    let category = query
        .category
        .map(|c| c.parse())
        .transpose()
        .map_err(|e: matchpoint_core::CoreError| AppError::ValidationError(e.to_string()))?;

    let tournaments = state
        .tournaments
        .list(&TournamentQuery {
            from: query.from,
            to: query.to,
            category,
            country: query.country,
        })
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(tournaments))
}

/// GET /v1/tournaments/{id}
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tournament>, AppError> {
    let tournament = state
        .tournaments
        .get(id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or_else(|| AppError::NotFoundError(format!("Tournament {} not found", id)))?;

    Ok(Json(tournament))
}
