use matchpoint_core::travel::{FlightOption, HotelOption, Money};
use serde::{Deserialize, Serialize};

/// A scored flight + hotel pairing. Ephemeral: built fresh per search and
/// never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelRecommendation {
    pub id: String,
    pub flight: FlightOption,
    pub hotel: HotelOption,
    pub total_price: Money,
    /// 0-100, higher is better.
    pub score: u8,
    /// At most four, most salient first.
    pub reasons: Vec<String>,
}

impl TravelRecommendation {
    /// The id is derived from the pairing so the same flight + hotel always
    /// yields the same id within a search response.
    pub fn new(
        flight: FlightOption,
        hotel: HotelOption,
        total_price: Money,
        score: u8,
        reasons: Vec<String>,
    ) -> Self {
        Self {
            id: format!("rec-{}-{}", flight.id, hotel.id),
            flight,
            hotel,
            total_price,
            score,
            reasons,
        }
    }
}
