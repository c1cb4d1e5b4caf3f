use crate::travel::GeoPoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Tour level of a tournament. The wire format uses the display strings
/// ("Grand Slam", "Masters 1000", "ATP 500" and so on); the enum closes
/// the set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentCategory {
    #[serde(rename = "Grand Slam")]
    GrandSlam,
    #[serde(rename = "Masters 1000")]
    Masters1000,
    #[serde(rename = "ATP 500")]
    Atp500,
    #[serde(rename = "ATP 250")]
    Atp250,
    #[serde(rename = "WTA")]
    Wta,
    #[serde(rename = "ITF")]
    Itf,
    #[serde(rename = "Challenger")]
    Challenger,
}

impl TournamentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrandSlam => "Grand Slam",
            Self::Masters1000 => "Masters 1000",
            Self::Atp500 => "ATP 500",
            Self::Atp250 => "ATP 250",
            Self::Wta => "WTA",
            Self::Itf => "ITF",
            Self::Challenger => "Challenger",
        }
    }
}

impl fmt::Display for TournamentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentCategory {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Grand Slam" => Ok(Self::GrandSlam),
            "Masters 1000" => Ok(Self::Masters1000),
            "ATP 500" => Ok(Self::Atp500),
            "ATP 250" => Ok(Self::Atp250),
            "WTA" => Ok(Self::Wta),
            "ITF" => Ok(Self::Itf),
            "Challenger" => Ok(Self::Challenger),
            other => Err(crate::CoreError::ValidationError(format!(
                "Unknown tournament category: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CourtSurface {
    Clay,
    Grass,
    Hard,
    Carpet,
}

impl CourtSurface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Grass => "Grass",
            Self::Hard => "Hard",
            Self::Carpet => "Carpet",
        }
    }
}

impl FromStr for CourtSurface {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Clay" => Ok(Self::Clay),
            "Grass" => Ok(Self::Grass),
            "Hard" => Ok(Self::Hard),
            "Carpet" => Ok(Self::Carpet),
            other => Err(crate::CoreError::ValidationError(format!(
                "Unknown court surface: {}",
                other
            ))),
        }
    }
}

/// A catalog tournament. The venue point, when present, lets suppliers
/// derive hotel distances instead of using canned values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub country: String,
    pub venue: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category: TournamentCategory,
    pub surface: CourtSurface,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_location: Option<GeoPoint>,
}

/// Filter + sort parameters for catalog queries. Results are always sorted
/// by start date ascending.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TournamentQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub category: Option<TournamentCategory>,
    pub country: Option<String>,
}
