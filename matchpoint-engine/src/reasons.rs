use crate::scoring::total_price;
use matchpoint_core::travel::{FlightOption, HotelAmenity, HotelOption, TravelSearchParams};

/// Most reasons attached to a single recommendation.
pub const MAX_REASONS: usize = 4;

/// Human-readable justifications for a pairing. The rules run in a fixed
/// priority order and the list is cut at four, so earlier rules win when
/// a pairing matches more than four.
pub fn build_reasons(
    flight: &FlightOption,
    hotel: &HotelOption,
    params: &TravelSearchParams,
) -> Vec<String> {
    let mut reasons = Vec::new();

    // 1. Budget headroom.
    if let Some(budget) = params.max_budget() {
        let total = total_price(flight, hotel, params).amount;
        if total <= budget * 0.8 {
            reasons.push("Great value within budget".to_string());
        }
    }

    // 2. Venue proximity. The two bands are mutually exclusive.
    if let Some(distance) = hotel.distance_to_venue {
        if distance <= 5.0 {
            reasons.push("Very close to tournament venue".to_string());
        } else if distance <= 10.0 {
            reasons.push("Convenient location near venue".to_string());
        }
    }

    // 3. Fitness facilities, only when the player asked for them.
    let prefers_fitness = params
        .preferred_amenities()
        .iter()
        .any(|a| matches!(a, HotelAmenity::Gym | HotelAmenity::FitnessCenter));
    let has_fitness = hotel
        .amenities
        .iter()
        .any(|a| matches!(a, HotelAmenity::Gym | HotelAmenity::FitnessCenter));
    if prefers_fitness && has_fitness {
        reasons.push("Hotel has fitness facilities".to_string());
    }

    // 4. Practice court.
    if hotel.amenities.contains(&HotelAmenity::TennisCourt) {
        reasons.push("Hotel has tennis court for practice".to_string());
    }

    // 5-6. Flight quality.
    if flight.stops == 0 {
        reasons.push("Direct flight - no layovers".to_string());
    }
    if flight.duration_minutes <= 180 {
        reasons.push("Short flight duration".to_string());
    }

    // 7. Hotel rating.
    if hotel.rating >= 4.5 {
        reasons.push("Highly rated accommodation".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}
