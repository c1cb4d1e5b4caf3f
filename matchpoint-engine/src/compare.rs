use matchpoint_core::travel::{FlightOption, HotelOption};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Head-to-head flight summary for the compare page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightComparison {
    pub cheapest: FlightOption,
    pub shortest: FlightOption,
    pub most_direct: FlightOption,
}

/// Head-to-head hotel summary for the compare page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelComparison {
    pub cheapest: HotelOption,
    pub best_rated: HotelOption,
    pub closest: HotelOption,
}

/// Pick the cheapest, shortest and most direct flight. `None` when there
/// is nothing to compare.
pub fn compare_flights(flights: &[FlightOption]) -> Option<FlightComparison> {
    let cheapest = flights
        .iter()
        .min_by(|a, b| cmp_f64(a.price.amount, b.price.amount))?;
    let shortest = flights.iter().min_by_key(|f| f.duration_minutes)?;
    let most_direct = flights.iter().min_by_key(|f| f.stops)?;

    Some(FlightComparison {
        cheapest: cheapest.clone(),
        shortest: shortest.clone(),
        most_direct: most_direct.clone(),
    })
}

/// Pick the cheapest, best rated and closest hotel. Hotels without a known
/// venue distance sort behind any hotel with one.
pub fn compare_hotels(hotels: &[HotelOption]) -> Option<HotelComparison> {
    let cheapest = hotels
        .iter()
        .min_by(|a, b| cmp_f64(a.price.amount, b.price.amount))?;
    let best_rated = hotels.iter().max_by(|a, b| cmp_f64(a.rating, b.rating))?;
    let closest = hotels.iter().min_by(|a, b| {
        cmp_f64(
            a.distance_to_venue.unwrap_or(f64::INFINITY),
            b.distance_to_venue.unwrap_or(f64::INFINITY),
        )
    })?;

    Some(HotelComparison {
        cheapest: cheapest.clone(),
        best_rated: best_rated.clone(),
        closest: closest.clone(),
    })
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use matchpoint_core::travel::{FlightEndpoint, HotelLocation, Money};

    fn flight(id: &str, price: f64, duration: u32, stops: u32) -> FlightOption {
        FlightOption {
            id: id.to_string(),
            airline: "Vueling".to_string(),
            departure: FlightEndpoint {
                airport: "BCN".to_string(),
                time: Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap(),
                city: "Barcelona".to_string(),
            },
            arrival: FlightEndpoint {
                airport: "CDG".to_string(),
                time: Utc.with_ymd_and_hms(2025, 5, 20, 9, 45, 0).unwrap(),
                city: "Paris".to_string(),
            },
            duration_minutes: duration,
            stops,
            price: Money::new(price, "EUR"),
            booking_url: String::new(),
        }
    }

    fn hotel(id: &str, price: f64, rating: f64, distance: Option<f64>) -> HotelOption {
        HotelOption {
            id: id.to_string(),
            name: id.to_string(),
            rating,
            location: HotelLocation {
                lat: 48.85,
                lng: 2.35,
                address: "Paris".to_string(),
            },
            amenities: vec![],
            distance_to_venue: distance,
            price: Money::new(price, "EUR"),
            booking_url: String::new(),
            images: vec![],
        }
    }

    #[test]
    fn test_flight_comparison_picks_each_dimension() {
        let flights = [
            flight("a", 400.0, 90, 1),
            flight("b", 250.0, 150, 2),
            flight("c", 320.0, 200, 0),
        ];
        let cmp = compare_flights(&flights).unwrap();
        assert_eq!(cmp.cheapest.id, "b");
        assert_eq!(cmp.shortest.id, "a");
        assert_eq!(cmp.most_direct.id, "c");
    }

    #[test]
    fn test_hotel_comparison_treats_unknown_distance_as_farthest() {
        let hotels = [
            hotel("a", 120.0, 3.9, None),
            hotel("b", 300.0, 4.8, Some(6.0)),
            hotel("c", 200.0, 4.1, Some(1.2)),
        ];
        let cmp = compare_hotels(&hotels).unwrap();
        assert_eq!(cmp.cheapest.id, "a");
        assert_eq!(cmp.best_rated.id, "b");
        assert_eq!(cmp.closest.id, "c");
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(compare_flights(&[]).is_none());
        assert!(compare_hotels(&[]).is_none());
    }
}
