use matchpoint_core::geo::haversine_distance_km;
use matchpoint_core::tournament::TournamentCategory;
use matchpoint_core::travel::{GeoPoint, HotelAmenity, HotelLocation, HotelOption, Money};
use rand::Rng;

/// Distances to the venue used when the tournament has no geocoded venue,
/// one per hotel slot (km).
const FALLBACK_DISTANCES_KM: [f64; 5] = [0.8, 1.5, 3.2, 5.1, 8.5];

/// Hotel tier, drives the amenity set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Luxury,
    Business,
    Standard,
    Budget,
}

impl Tier {
    fn amenities(self) -> Vec<HotelAmenity> {
        use HotelAmenity::*;
        match self {
            Tier::Luxury => vec![Gym, Spa, Wifi, Pool, TennisCourt, Restaurant, FitnessCenter],
            Tier::Business => vec![Gym, Wifi, Restaurant, FitnessCenter, BusinessCenter],
            Tier::Standard | Tier::Budget => vec![Wifi, Restaurant],
        }
    }
}

struct HotelSeed {
    name: &'static str,
    rating: f64,
    base_price: f64,
    tier: Tier,
    lat: f64,
    lng: f64,
}

/// Generates mock hotel candidates from per-city tables, with prices
/// inflated for bigger tournaments.
#[derive(Debug, Clone, Default)]
pub struct HotelSupplier;

impl HotelSupplier {
    pub fn new() -> Self {
        Self
    }

    /// Candidates for a tournament city. Venue distance comes from the
    /// geocoded venue when available, otherwise from the canned per-slot
    /// distances.
    pub fn hotels_for(
        &self,
        city: &str,
        category: Option<TournamentCategory>,
        venue_location: Option<GeoPoint>,
        rng: &mut impl Rng,
    ) -> Vec<HotelOption> {
        let seeds = city_hotels(city);
        let premium = category_premium(category);

        seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let distance = venue_location
                    .map(|venue| haversine_distance_km(seed.lat, seed.lng, venue.lat, venue.lng))
                    .unwrap_or_else(|| {
                        FALLBACK_DISTANCES_KM[i % FALLBACK_DISTANCES_KM.len()]
                    });

                HotelOption {
                    id: format!("hotel-{}", i + 1),
                    name: seed.name.to_string(),
                    rating: seed.rating,
                    location: HotelLocation {
                        lat: seed.lat,
                        lng: seed.lng,
                        address: format!(
                            "{} Tennis Street, {}",
                            rng.gen_range(1..1000),
                            city
                        ),
                    },
                    amenities: seed.tier.amenities(),
                    distance_to_venue: Some((distance * 10.0).round() / 10.0),
                    price: Money::new((seed.base_price * premium).round(), "EUR"),
                    booking_url: format!(
                        "https://www.booking.com/hotel/{}-{}.html",
                        city.to_lowercase(),
                        slug(seed.name)
                    ),
                    images: vec![format!(
                        "https://via.placeholder.com/400x250?text={}",
                        seed.name.replace(' ', "+")
                    )],
                }
            })
            .collect()
    }
}

/// Bigger tournaments pull hotel prices up; 1.3 covers regular tour stops.
fn category_premium(category: Option<TournamentCategory>) -> f64 {
    match category {
        Some(TournamentCategory::GrandSlam) => 2.5,
        Some(TournamentCategory::Masters1000) => 1.8,
        _ => 1.3,
    }
}

fn city_hotels(city: &str) -> &'static [HotelSeed] {
    const PARIS: &[HotelSeed] = &[
        HotelSeed { name: "Le Meurice", rating: 5.0, base_price: 850.0, tier: Tier::Luxury, lat: 48.8656, lng: 2.3280 },
        HotelSeed { name: "Hotel Plaza Athenee", rating: 4.9, base_price: 750.0, tier: Tier::Luxury, lat: 48.8661, lng: 2.3041 },
        HotelSeed { name: "Pullman Paris Montparnasse", rating: 4.5, base_price: 280.0, tier: Tier::Business, lat: 48.8394, lng: 2.3193 },
        HotelSeed { name: "Novotel Paris Centre Gare Montparnasse", rating: 4.2, base_price: 200.0, tier: Tier::Standard, lat: 48.8414, lng: 2.3187 },
        HotelSeed { name: "Ibis Paris 17 Clichy-Batignolles", rating: 3.8, base_price: 120.0, tier: Tier::Budget, lat: 48.8938, lng: 2.3150 },
    ];
    const MADRID: &[HotelSeed] = &[
        HotelSeed { name: "The Ritz-Carlton Madrid", rating: 5.0, base_price: 650.0, tier: Tier::Luxury, lat: 40.4153, lng: -3.6920 },
        HotelSeed { name: "Hotel Villa Magna", rating: 4.8, base_price: 450.0, tier: Tier::Luxury, lat: 40.4311, lng: -3.6882 },
        HotelSeed { name: "NH Collection Madrid Suecia", rating: 4.4, base_price: 180.0, tier: Tier::Business, lat: 40.4186, lng: -3.6967 },
        HotelSeed { name: "Hotel Mediodia", rating: 4.0, base_price: 140.0, tier: Tier::Standard, lat: 40.4070, lng: -3.6910 },
    ];
    const LONDON: &[HotelSeed] = &[
        HotelSeed { name: "The Savoy", rating: 5.0, base_price: 950.0, tier: Tier::Luxury, lat: 51.5101, lng: -0.1206 },
        HotelSeed { name: "Claridge's", rating: 4.9, base_price: 850.0, tier: Tier::Luxury, lat: 51.5126, lng: -0.1478 },
        HotelSeed { name: "The Langham London", rating: 4.6, base_price: 380.0, tier: Tier::Business, lat: 51.5177, lng: -0.1445 },
        HotelSeed { name: "Premier Inn London Southwark", rating: 4.2, base_price: 150.0, tier: Tier::Standard, lat: 51.5052, lng: -0.0955 },
    ];

    match city {
        "Madrid" => MADRID,
        "London" => LONDON,
        // Paris doubles as the fallback city.
        _ => PARIS,
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
