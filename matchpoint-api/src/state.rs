use matchpoint_core::repository::{FavoriteRepository, TournamentRepository};
use matchpoint_engine::RecommendationEngine;
use matchpoint_supply::{FlightSupplier, HotelSupplier};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tournaments: Arc<dyn TournamentRepository>,
    pub favorites: Arc<dyn FavoriteRepository>,
    pub engine: Arc<RecommendationEngine>,
    pub flight_supplier: Arc<FlightSupplier>,
    pub hotel_supplier: Arc<HotelSupplier>,
}
