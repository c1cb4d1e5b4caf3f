use crate::models::TravelRecommendation;
use crate::reasons::build_reasons;
use crate::scoring::{compute_score, total_price};
use crate::EngineError;
use chrono::NaiveDate;
use matchpoint_core::travel::{FlightOption, HotelOption, TravelSearchParams};

/// Recommendations returned per search unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 6;

/// Scores every flight + hotel pairing for a trip and returns a ranked,
/// explainable top-N. Pure computation: no I/O, no shared state, safe to
/// call from any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    top_n: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Weighted multi-factor score for one pairing, 0-100.
    pub fn score_pair(
        &self,
        flight: &FlightOption,
        hotel: &HotelOption,
        params: &TravelSearchParams,
    ) -> u8 {
        compute_score(flight, hotel, params)
    }

    /// Up to four justification strings, most salient first.
    pub fn explain_pair(
        &self,
        flight: &FlightOption,
        hotel: &HotelOption,
        params: &TravelSearchParams,
    ) -> Vec<String> {
        build_reasons(flight, hotel, params)
    }

    /// Score the full cross product of candidates and return the top-N,
    /// sorted by score descending with ties broken by the cheaper total.
    /// Empty candidate sets are not an error: they rank to an empty list.
    pub fn rank(
        &self,
        flights: &[FlightOption],
        hotels: &[HotelOption],
        params: &TravelSearchParams,
    ) -> Result<Vec<TravelRecommendation>, EngineError> {
        validate_dates(params)?;

        if flights.is_empty() || hotels.is_empty() {
            return Ok(Vec::new());
        }

        let mut recommendations = Vec::with_capacity(flights.len() * hotels.len());
        for flight in flights {
            for hotel in hotels {
                recommendations.push(TravelRecommendation::new(
                    flight.clone(),
                    hotel.clone(),
                    total_price(flight, hotel, params),
                    compute_score(flight, hotel, params),
                    build_reasons(flight, hotel, params),
                ));
            }
        }

        recommendations.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                a.total_price
                    .amount
                    .partial_cmp(&b.total_price.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });
        recommendations.truncate(self.top_n);

        Ok(recommendations)
    }
}

fn validate_dates(params: &TravelSearchParams) -> Result<(), EngineError> {
    let departure = NaiveDate::parse_from_str(&params.departure_date, "%Y-%m-%d")
        .map_err(|_| {
            EngineError::InvalidSearchParameters(format!(
                "Invalid departure date: {:?}",
                params.departure_date
            ))
        })?;
    let ret = NaiveDate::parse_from_str(&params.return_date, "%Y-%m-%d").map_err(|_| {
        EngineError::InvalidSearchParameters(format!(
            "Invalid return date: {:?}",
            params.return_date
        ))
    })?;

    // Equal dates are a valid day trip (one billing night); only an
    // inverted range is rejected.
    if ret < departure {
        return Err(EngineError::InvalidSearchParameters(
            "Return date must not be before departure date".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use matchpoint_core::travel::{FlightEndpoint, HotelAmenity, HotelLocation, Money};

    fn flight(id: &str, price: f64, stops: u32, duration: u32) -> FlightOption {
        FlightOption {
            id: id.to_string(),
            airline: "Iberia".to_string(),
            departure: FlightEndpoint {
                airport: "MAD".to_string(),
                time: Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap(),
                city: "Madrid".to_string(),
            },
            arrival: FlightEndpoint {
                airport: "CDG".to_string(),
                time: Utc.with_ymd_and_hms(2025, 5, 20, 10, 15, 0).unwrap(),
                city: "Paris".to_string(),
            },
            duration_minutes: duration,
            stops,
            price: Money::new(price, "EUR"),
            booking_url: String::new(),
        }
    }

    fn hotel(id: &str, price_per_night: f64, distance: Option<f64>) -> HotelOption {
        HotelOption {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            rating: 4.2,
            location: HotelLocation {
                lat: 48.85,
                lng: 2.35,
                address: "Paris".to_string(),
            },
            amenities: vec![HotelAmenity::Wifi],
            distance_to_venue: distance,
            price: Money::new(price_per_night, "EUR"),
            booking_url: String::new(),
            images: vec![],
        }
    }

    fn params(departure: &str, ret: &str) -> TravelSearchParams {
        TravelSearchParams {
            tournament_id: None,
            destination: Some("Paris".to_string()),
            origin: "Madrid".to_string(),
            passengers: 1,
            departure_date: departure.to_string(),
            return_date: ret.to_string(),
            preferences: None,
        }
    }

    #[test]
    fn test_rank_sorted_and_capped() {
        let flights: Vec<_> = (0..3)
            .map(|i| flight(&format!("flight-{}", i), 300.0 + 100.0 * i as f64, i, 120))
            .collect();
        let hotels: Vec<_> = (0..4)
            .map(|i| hotel(&format!("hotel-{}", i), 100.0 + 50.0 * i as f64, Some(1.0 + i as f64)))
            .collect();

        let engine = RecommendationEngine::new();
        let ranked = engine
            .rank(&flights, &hotels, &params("2025-05-20", "2025-05-24"))
            .unwrap();

        assert_eq!(ranked.len(), DEFAULT_TOP_N);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].total_price.amount <= pair[1].total_price.amount);
            }
        }
    }

    #[test]
    fn test_rank_returns_all_pairs_when_fewer_than_top_n() {
        let engine = RecommendationEngine::new();
        let ranked = engine
            .rank(
                &[flight("flight-1", 300.0, 0, 120)],
                &[hotel("hotel-1", 100.0, Some(2.0)), hotel("hotel-2", 200.0, Some(6.0))],
                &params("2025-05-20", "2025-05-24"),
            )
            .unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_tie_broken_by_cheaper_total() {
        // Identical flights and venue distances, different hotel price:
        // same component profile except price, so with a shared budget both
        // land on distinct scores unless the budget saturates. Use a huge
        // budget so the price component clamps to 100 for both and the
        // totals differ only in the tie-break.
        let prefs = matchpoint_core::travel::TravelPreferences {
            max_budget: Some(1_000_000.0),
            ..Default::default()
        };
        let mut p = params("2025-05-20", "2025-05-24");
        p.preferences = Some(prefs);

        let engine = RecommendationEngine::new();
        let ranked = engine
            .rank(
                &[flight("flight-1", 300.0, 0, 120)],
                &[hotel("hotel-dear", 175.0, Some(2.0)), hotel("hotel-cheap", 150.0, Some(2.0))],
                &p,
            )
            .unwrap();

        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].hotel.id, "hotel-cheap");
        assert!(ranked[0].total_price.amount < ranked[1].total_price.amount);
    }

    #[test]
    fn test_empty_candidates_rank_to_empty_list() {
        let engine = RecommendationEngine::new();
        let ranked = engine
            .rank(
                &[flight("flight-1", 300.0, 0, 120)],
                &[],
                &params("2025-05-20", "2025-05-24"),
            )
            .unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_equal_dates_are_a_one_night_trip() {
        let engine = RecommendationEngine::new();
        let ranked = engine
            .rank(
                &[flight("flight-1", 300.0, 0, 120)],
                &[hotel("hotel-1", 100.0, Some(2.0))],
                &params("2025-05-20", "2025-05-20"),
            )
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_price.amount, 400.0);
    }

    #[test]
    fn test_unparseable_dates_rejected() {
        let engine = RecommendationEngine::new();
        let err = engine
            .rank(
                &[flight("flight-1", 300.0, 0, 120)],
                &[hotel("hotel-1", 100.0, Some(2.0))],
                &params("next tuesday", "2025-05-24"),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSearchParameters(_)));
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let engine = RecommendationEngine::new();
        let err = engine
            .rank(
                &[flight("flight-1", 300.0, 0, 120)],
                &[hotel("hotel-1", 100.0, Some(2.0))],
                &params("2025-05-24", "2025-05-20"),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidSearchParameters(_)));
    }

    #[test]
    fn test_recommendation_id_is_deterministic() {
        let engine = RecommendationEngine::new();
        let p = params("2025-05-20", "2025-05-24");
        let f = [flight("flight-1", 300.0, 0, 120)];
        let h = [hotel("hotel-1", 100.0, Some(2.0))];

        let first = engine.rank(&f, &h, &p).unwrap();
        let second = engine.rank(&f, &h, &p).unwrap();
        assert_eq!(first[0].id, "rec-flight-1-hotel-1");
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[0].score, second[0].score);
        assert_eq!(first[0].reasons, second[0].reasons);
    }
}
