pub mod compare;
pub mod models;
pub mod ranker;
pub mod reasons;
pub mod scoring;

pub use compare::{compare_flights, compare_hotels, FlightComparison, HotelComparison};
pub use models::TravelRecommendation;
pub use ranker::RecommendationEngine;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid search parameters: {0}")]
    InvalidSearchParameters(String),
}
