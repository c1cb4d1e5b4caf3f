use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::NaiveDate;
use matchpoint_core::travel::{FlightOption, HotelOption, TravelPreferences, TravelSearchParams};
use matchpoint_engine::TravelRecommendation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTravelRequest {
    pub origin: Option<String>,
    pub departure_date: Option<String>,
    pub return_date: Option<String>,
    pub tournament_id: Option<Uuid>,
    pub destination: Option<String>,
    pub passengers: Option<u32>,
    pub player_id: Option<Uuid>,
    pub preferences: Option<TravelPreferences>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTravelResponse {
    pub flights: Vec<FlightOption>,
    pub hotels: Vec<HotelOption>,
    pub recommendations: Vec<TravelRecommendation>,
    pub destination: String,
}

/// POST /v1/travel/search
/// Generate flight/hotel candidates for a trip and rank their pairings.
pub async fn search_travel(
    State(state): State<AppState>,
    Json(req): Json<SearchTravelRequest>,
) -> Result<Json<SearchTravelResponse>, AppError> {
    // 1. Validate required parameters
    let origin = req
        .origin
        .filter(|o| !o.is_empty())
        .ok_or_else(|| AppError::ValidationError("Missing required parameter: origin".to_string()))?;
    let departure_date = req
        .departure_date
        .ok_or_else(|| AppError::ValidationError("Please select valid travel dates".to_string()))?;
    let return_date = req
        .return_date
        .ok_or_else(|| AppError::ValidationError("Please select valid travel dates".to_string()))?;
    let departure_day = NaiveDate::parse_from_str(&departure_date, "%Y-%m-%d")
        .map_err(|_| AppError::ValidationError("Please select valid travel dates".to_string()))?;

    // 2. Resolve the destination from the tournament catalog when possible
    let tournament = match req.tournament_id {
        Some(id) => Some(
            state
                .tournaments
                .get(id)
                .await
                .map_err(|e| AppError::InternalServerError(e.to_string()))?
                .ok_or_else(|| AppError::NotFoundError(format!("Tournament {} not found", id)))?,
        ),
        None => None,
    };
    let destination = tournament
        .as_ref()
        .map(|t| t.city.clone())
        .or(req.destination)
        .ok_or_else(|| {
            AppError::ValidationError(
                "Either tournamentId or destination is required".to_string(),
            )
        })?;

    // 3. Generate candidates
    // ThreadRng is !Send; scope it so the handler future stays Send across later awaits
    let (flights, hotels) = {
        let mut rng = rand::thread_rng();
        let flights = state
            .flight_supplier
            .flights_for(&origin, &destination, departure_day, &mut rng);
        let hotels = state.hotel_supplier.hotels_for(
            &destination,
            tournament.as_ref().map(|t| t.category),
            tournament.as_ref().and_then(|t| t.venue_location),
            &mut rng,
        );
        (flights, hotels)
    };

    // 4. Rank pairings
    let params = TravelSearchParams {
        tournament_id: req.tournament_id,
        destination: Some(destination.clone()),
        origin,
        passengers: req.passengers.unwrap_or(1).max(1),
        departure_date,
        return_date,
        preferences: req.preferences,
    };
    let recommendations = state
        .engine
        .rank(&flights, &hotels, &params)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    // 5. Search history is best effort; a storage hiccup must not fail the search
    if let Some(player_id) = req.player_id {
        if let Err(e) = state.favorites.record_search(player_id, &params).await {
            tracing::warn!("Failed to record search for player {}: {}", player_id, e);
        }
    }

    Ok(Json(SearchTravelResponse {
        flights,
        hotels,
        recommendations,
        destination,
    }))
}
