use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monetary amount. All options within one search response share a single
/// currency; there is no conversion anywhere in the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Money {
    pub amount: f64,
    pub currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

/// One end of a flight leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightEndpoint {
    pub airport: String,
    pub time: DateTime<Utc>,
    pub city: String,
}

/// A candidate flight returned by a supply source. Ids are only unique
/// within a single search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOption {
    pub id: String,
    pub airline: String,
    pub departure: FlightEndpoint,
    pub arrival: FlightEndpoint,
    pub duration_minutes: u32,
    pub stops: u32,
    pub price: Money,
    pub booking_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Closed amenity vocabulary shared by suppliers and preferences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HotelAmenity {
    Gym,
    Pool,
    Spa,
    Restaurant,
    Wifi,
    Parking,
    TennisCourt,
    FitnessCenter,
    BusinessCenter,
}

/// A candidate hotel returned by a supply source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelOption {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub location: HotelLocation,
    pub amenities: Vec<HotelAmenity>,
    /// Kilometres to the tournament venue. Absent means "unknown", which
    /// scoring treats as sitting exactly at the distance threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_to_venue: Option<f64>,
    /// Price per night.
    pub price: Money,
    pub booking_url: String,
    pub images: Vec<String>,
}

/// Optional constraints a player attaches to a search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_airlines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_amenities: Option<Vec<HotelAmenity>>,
    /// Kilometres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance_to_venue: Option<f64>,
}

/// Trip context for one search request. Dates are ISO-8601 date strings as
/// they arrive on the wire; the engine validates them before ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    pub origin: String,
    pub passengers: u32,
    pub departure_date: String,
    pub return_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<TravelPreferences>,
}

impl TravelSearchParams {
    pub fn preferred_amenities(&self) -> &[HotelAmenity] {
        self.preferences
            .as_ref()
            .and_then(|p| p.hotel_amenities.as_deref())
            .unwrap_or(&[])
    }

    pub fn max_budget(&self) -> Option<f64> {
        self.preferences.as_ref().and_then(|p| p.max_budget)
    }

    pub fn max_distance_to_venue(&self) -> Option<f64> {
        self.preferences.as_ref().and_then(|p| p.max_distance_to_venue)
    }
}
