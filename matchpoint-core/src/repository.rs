use crate::tournament::{Tournament, TournamentQuery};
use crate::travel::TravelSearchParams;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A search a player ran, kept for the dashboard's recent-searches panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedSearch {
    pub id: Uuid,
    pub player_id: Uuid,
    pub params: TravelSearchParams,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for the tournament catalog.
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    async fn list(
        &self,
        query: &TournamentQuery,
    ) -> Result<Vec<Tournament>, Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Tournament>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for per-player favorites and search history.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn add_favorite(
        &self,
        player_id: Uuid,
        tournament_id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn remove_favorite(
        &self,
        player_id: Uuid,
        tournament_id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn list_favorites(
        &self,
        player_id: Uuid,
    ) -> Result<Vec<Tournament>, Box<dyn std::error::Error + Send + Sync>>;

    async fn record_search(
        &self,
        player_id: Uuid,
        params: &TravelSearchParams,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn recent_searches(
        &self,
        player_id: Uuid,
        limit: i64,
    ) -> Result<Vec<RecordedSearch>, Box<dyn std::error::Error + Send + Sync>>;
}
