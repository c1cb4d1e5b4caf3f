use crate::error::AppError;
use axum::Json;
use matchpoint_core::travel::{FlightOption, HotelOption};
use matchpoint_engine::{FlightComparison, HotelComparison};

/// POST /v1/compare/flights
pub async fn compare_flights(
    Json(flights): Json<Vec<FlightOption>>,
) -> Result<Json<FlightComparison>, AppError> {
    matchpoint_engine::compare_flights(&flights)
        .map(Json)
        .ok_or_else(|| AppError::ValidationError("No flights to compare".to_string()))
}

/// POST /v1/compare/hotels
pub async fn compare_hotels(
    Json(hotels): Json<Vec<HotelOption>>,
) -> Result<Json<HotelComparison>, AppError> {
    matchpoint_engine::compare_hotels(&hotels)
        .map(Json)
        .ok_or_else(|| AppError::ValidationError("No hotels to compare".to_string()))
}
