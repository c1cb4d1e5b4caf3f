use chrono::{NaiveDate, Timelike};
use matchpoint_core::travel::{FlightOption, HotelAmenity, HotelOption, Money, TravelSearchParams};

// Fixed scoring policy. Price dominates as the primary purchase driver,
// venue proximity is the product differentiator, amenities and flight
// convenience are secondary refinements. Not user-configurable: callers
// depend on scores being reproducible across releases.
pub const PRICE_WEIGHT: f64 = 0.40;
pub const DISTANCE_WEIGHT: f64 = 0.30;
pub const AMENITIES_WEIGHT: f64 = 0.20;
pub const CONVENIENCE_WEIGHT: f64 = 0.10;

/// Synthetic budget ceiling applied when the player gave none, so
/// unconstrained searches still produce a differentiated price score.
pub const SYNTHETIC_BUDGET_FACTOR: f64 = 1.5;

/// Default venue-distance threshold in kilometres.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 20.0;

/// Amenity score used when the player expressed no amenity preference.
pub const NEUTRAL_AMENITY_SCORE: f64 = 75.0;

/// Number of hotel-billing nights for the trip, floored at 1 so equal or
/// inverted dates never produce a zero-cost itinerary. Unparseable dates
/// also fall back to 1; `rank` rejects those before scoring.
pub fn trip_nights(params: &TravelSearchParams) -> u32 {
    let departure = NaiveDate::parse_from_str(&params.departure_date, "%Y-%m-%d");
    let ret = NaiveDate::parse_from_str(&params.return_date, "%Y-%m-%d");

    match (departure, ret) {
        (Ok(departure), Ok(ret)) => (ret - departure).num_days().unsigned_abs().max(1) as u32,
        _ => 1,
    }
}

/// Flight price plus hotel price for every night of the trip. Takes the
/// flight's currency; a scoring run never mixes currencies.
pub fn total_price(flight: &FlightOption, hotel: &HotelOption, params: &TravelSearchParams) -> Money {
    let nights = trip_nights(params) as f64;
    Money::new(
        flight.price.amount + hotel.price.amount * nights,
        flight.price.currency.clone(),
    )
}

/// Lower total price relative to the budget scores higher.
pub fn price_score(total: f64, max_budget: Option<f64>) -> f64 {
    let budget = max_budget.unwrap_or(total * SYNTHETIC_BUDGET_FACTOR);
    if budget <= 0.0 {
        return 0.0;
    }
    ((budget - total) / budget * 100.0).clamp(0.0, 100.0)
}

/// Closer to the venue scores higher. A hotel with unknown distance is
/// treated as sitting exactly at the threshold, never as free proximity.
pub fn distance_score(distance_to_venue: Option<f64>, max_distance: Option<f64>) -> f64 {
    let max_distance = max_distance.unwrap_or(DEFAULT_MAX_DISTANCE_KM);
    if max_distance <= 0.0 {
        return 0.0;
    }
    let distance = distance_to_venue.unwrap_or(max_distance);
    ((max_distance - distance) / max_distance * 100.0).clamp(0.0, 100.0)
}

/// Fraction of preferred amenities the hotel covers, or a neutral value
/// when the player expressed no preference.
pub fn amenities_score(preferred: &[HotelAmenity], available: &[HotelAmenity]) -> f64 {
    if preferred.is_empty() {
        return NEUTRAL_AMENITY_SCORE;
    }
    let matched = preferred.iter().filter(|a| available.contains(a)).count();
    matched as f64 / preferred.len() as f64 * 100.0
}

/// Flight-only convenience: fewer stops, shorter duration, civilised
/// departure hour (06:00-22:00 UTC).
pub fn convenience_score(flight: &FlightOption) -> f64 {
    let mut score: u32 = 50;

    score += match flight.stops {
        0 => 30,
        1 => 10,
        _ => 0,
    };

    if flight.duration_minutes <= 120 {
        score += 20;
    } else if flight.duration_minutes <= 240 {
        score += 10;
    }

    let departure_hour = flight.departure.time.hour();
    if (6..=22).contains(&departure_hour) {
        score += 10;
    }

    score.min(100) as f64
}

/// Weighted multi-factor score for one flight + hotel pairing, rounded and
/// clamped to 0-100.
pub fn compute_score(
    flight: &FlightOption,
    hotel: &HotelOption,
    params: &TravelSearchParams,
) -> u8 {
    let total = total_price(flight, hotel, params).amount;

    let price = price_score(total, params.max_budget());
    let distance = distance_score(hotel.distance_to_venue, params.max_distance_to_venue());
    let amenities = amenities_score(params.preferred_amenities(), &hotel.amenities);
    let convenience = convenience_score(flight);

    let weighted = price * PRICE_WEIGHT
        + distance * DISTANCE_WEIGHT
        + amenities * AMENITIES_WEIGHT
        + convenience * CONVENIENCE_WEIGHT;

    weighted.round().clamp(0.0, 100.0) as u8
}
