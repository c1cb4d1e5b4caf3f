use chrono::{Duration, NaiveDate, NaiveTime};
use matchpoint_core::travel::{FlightEndpoint, FlightOption, Money};
use rand::Rng;

/// Candidates generated per search.
const FLIGHTS_PER_SEARCH: usize = 3;

/// Departure slots as minutes from midnight UTC: 08:00, 14:00, 18:30.
const DEPARTURE_SLOTS: [i64; FLIGHTS_PER_SEARCH] = [480, 840, 1110];

/// Extra minutes a one-stop itinerary spends on the ground.
const LAYOVER_MINUTES: u32 = 75;

const PRICE_VARIANCE: f64 = 100.0;
const DEFAULT_BASE_PRICE: f64 = 400.0;
const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Fallbacks for cities missing from the airport table.
const FALLBACK_ORIGIN: (&str, &[&str]) = ("MAD", &["Iberia"]);
const FALLBACK_DESTINATION: (&str, &[&str]) = ("CDG", &["Air France"]);

/// Generates mock flight candidates from a table of real routes between
/// cities hosting tour events.
#[derive(Debug, Clone, Default)]
pub struct FlightSupplier;

impl FlightSupplier {
    pub fn new() -> Self {
        Self
    }

    /// Three candidates for a route: airline rotation from the destination
    /// airport's carriers, base fare with random variance, and a one-stop
    /// option in the last slot.
    pub fn flights_for(
        &self,
        origin: &str,
        destination: &str,
        departure_date: NaiveDate,
        rng: &mut impl Rng,
    ) -> Vec<FlightOption> {
        let (origin_code, _) = airport_info(origin).unwrap_or(FALLBACK_ORIGIN);
        let (dest_code, airlines) = airport_info(destination).unwrap_or(FALLBACK_DESTINATION);

        let base_price = route_base_price(origin, destination);
        let base_duration = route_duration_minutes(origin, destination);

        (0..FLIGHTS_PER_SEARCH)
            .map(|i| {
                let airline = airlines[i % airlines.len()];
                let variance = rng.gen_range(-PRICE_VARIANCE..PRICE_VARIANCE);
                let stops = if i == FLIGHTS_PER_SEARCH - 1 { 1 } else { 0 };
                let duration_minutes = base_duration + stops * LAYOVER_MINUTES;

                let departure_time = departure_date
                    .and_time(NaiveTime::MIN)
                    .and_utc()
                    + Duration::minutes(DEPARTURE_SLOTS[i]);
                let arrival_time = departure_time + Duration::minutes(duration_minutes as i64);

                FlightOption {
                    id: format!("flight-{}", i + 1),
                    airline: airline.to_string(),
                    departure: FlightEndpoint {
                        airport: origin_code.to_string(),
                        time: departure_time,
                        city: origin.to_string(),
                    },
                    arrival: FlightEndpoint {
                        airport: dest_code.to_string(),
                        time: arrival_time,
                        city: destination.to_string(),
                    },
                    duration_minutes,
                    stops,
                    price: Money::new((base_price + variance).round(), "EUR"),
                    booking_url: format!(
                        "https://www.skyscanner.com/transport/flights/{}/{}/{}/",
                        origin_code,
                        dest_code,
                        departure_date.format("%Y%m%d")
                    ),
                }
            })
            .collect()
    }
}

fn airport_info(city: &str) -> Option<(&'static str, &'static [&'static str])> {
    let info: (&'static str, &'static [&'static str]) = match city {
        "Madrid" => ("MAD", &["Iberia", "Air France", "Vueling"]),
        "Barcelona" => ("BCN", &["Vueling", "Iberia", "Air France"]),
        "Paris" => ("CDG", &["Air France", "Iberia", "Lufthansa"]),
        "London" => ("LHR", &["British Airways", "Iberia", "Air France"]),
        "New York" => ("JFK", &["Delta", "Air France", "American"]),
        "Miami" => ("MIA", &["American", "Iberia", "Air France"]),
        "Shanghai" => ("PVG", &["Air China", "China Eastern", "Lufthansa"]),
        "Turin" => ("TRN", &["Alitalia", "Lufthansa", "Air France"]),
        "Monte Carlo" => ("NCE", &["Air France", "Iberia", "British Airways"]),
        "Indian Wells" => ("PSP", &["American", "United", "Delta"]),
        _ => return None,
    };
    Some(info)
}

fn route_base_price(origin: &str, destination: &str) -> f64 {
    route_lookup(
        origin,
        destination,
        &[
            ("Madrid", "Paris", 280.0),
            ("Barcelona", "Paris", 320.0),
            ("Madrid", "London", 350.0),
            ("Paris", "New York", 650.0),
            ("Madrid", "Miami", 850.0),
            ("Paris", "Shanghai", 950.0),
            ("Madrid", "Monte Carlo", 450.0),
        ],
    )
    .unwrap_or(DEFAULT_BASE_PRICE)
}

fn route_duration_minutes(origin: &str, destination: &str) -> u32 {
    route_lookup(
        origin,
        destination,
        &[
            ("Madrid", "Paris", 120),
            ("Barcelona", "Paris", 105),
            ("Madrid", "London", 135),
            ("Paris", "New York", 480),
            ("Madrid", "Miami", 540),
            ("Paris", "Shanghai", 660),
        ],
    )
    .unwrap_or(DEFAULT_DURATION_MINUTES)
}

/// Route tables are undirected: a Paris-Madrid search reuses the
/// Madrid-Paris entry.
fn route_lookup<T: Copy>(origin: &str, destination: &str, table: &[(&str, &str, T)]) -> Option<T> {
    table
        .iter()
        .find(|(a, b, _)| (*a == origin && *b == destination) || (*a == destination && *b == origin))
        .map(|(_, _, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_three_flights_with_one_stop_option() {
        let mut rng = StdRng::seed_from_u64(7);
        let supplier = FlightSupplier::new();
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let flights = supplier.flights_for("Madrid", "Paris", date, &mut rng);

        assert_eq!(flights.len(), 3);
        assert_eq!(flights[0].stops, 0);
        assert_eq!(flights[1].stops, 0);
        assert_eq!(flights[2].stops, 1);
        assert_eq!(flights[2].duration_minutes, 120 + LAYOVER_MINUTES);
    }

    #[test]
    fn test_prices_stay_within_variance_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let supplier = FlightSupplier::new();
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        for flight in supplier.flights_for("Madrid", "Paris", date, &mut rng) {
            assert!(flight.price.amount >= 180.0 && flight.price.amount <= 380.0);
            assert_eq!(flight.price.currency, "EUR");
        }
    }

    #[test]
    fn test_arrival_follows_departure() {
        let mut rng = StdRng::seed_from_u64(1);
        let supplier = FlightSupplier::new();
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        for flight in supplier.flights_for("Paris", "New York", date, &mut rng) {
            assert!(flight.arrival.time > flight.departure.time);
        }
    }

    #[test]
    fn test_unknown_route_falls_back_to_defaults() {
        let mut rng = StdRng::seed_from_u64(3);
        let supplier = FlightSupplier::new();
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let flights = supplier.flights_for("Reykjavik", "Paris", date, &mut rng);

        assert_eq!(flights[0].departure.airport, "MAD");
        assert_eq!(flights[0].duration_minutes, DEFAULT_DURATION_MINUTES);
    }

    #[test]
    fn test_route_tables_are_undirected() {
        assert_eq!(route_base_price("Paris", "Madrid"), 280.0);
        assert_eq!(route_duration_minutes("New York", "Paris"), 480);
    }
}
