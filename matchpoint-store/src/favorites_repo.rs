use async_trait::async_trait;
use chrono::{DateTime, Utc};
use matchpoint_core::repository::{FavoriteRepository, RecordedSearch};
use matchpoint_core::tournament::Tournament;
use matchpoint_core::travel::{GeoPoint, TravelSearchParams};
use sqlx::PgPool;
use uuid::Uuid;

pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteTournamentRow {
    id: Uuid,
    name: String,
    city: String,
    country: String,
    venue: String,
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
    category: String,
    surface: String,
    venue_lat: Option<f64>,
    venue_lng: Option<f64>,
}

#[derive(sqlx::FromRow)]
struct SearchRow {
    id: Uuid,
    player_id: Uuid,
    params: serde_json::Value,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    async fn add_favorite(
        &self,
        player_id: Uuid,
        tournament_id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query(
            "INSERT INTO user_favorites (player_id, tournament_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(player_id)
        .bind(tournament_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove_favorite(
        &self,
        player_id: Uuid,
        tournament_id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("DELETE FROM user_favorites WHERE player_id = $1 AND tournament_id = $2")
            .bind(player_id)
            .bind(tournament_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_favorites(
        &self,
        player_id: Uuid,
    ) -> Result<Vec<Tournament>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<FavoriteTournamentRow> = sqlx::query_as(
            "SELECT t.id, t.name, t.city, t.country, t.venue, t.start_date, t.end_date, \
                    t.category, t.surface, t.venue_lat, t.venue_lng \
             FROM tournaments t \
             JOIN user_favorites f ON f.tournament_id = t.id \
             WHERE f.player_id = $1 \
             ORDER BY t.start_date ASC",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let venue_location = match (row.venue_lat, row.venue_lng) {
                    (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
                    _ => None,
                };
                Ok(Tournament {
                    id: row.id,
                    name: row.name,
                    city: row.city,
                    country: row.country,
                    venue: row.venue,
                    start_date: row.start_date,
                    end_date: row.end_date,
                    category: row.category.parse()?,
                    surface: row.surface.parse()?,
                    venue_location,
                })
            })
            .collect()
    }

    async fn record_search(
        &self,
        player_id: Uuid,
        params: &TravelSearchParams,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("INSERT INTO search_history (id, player_id, params) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(player_id)
            .bind(serde_json::to_value(params)?)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn recent_searches(
        &self,
        player_id: Uuid,
        limit: i64,
    ) -> Result<Vec<RecordedSearch>, Box<dyn std::error::Error + Send + Sync>> {
        let rows: Vec<SearchRow> = sqlx::query_as(
            "SELECT id, player_id, params, created_at FROM search_history \
             WHERE player_id = $1 ORDER BY created_at DESC LIMIT $2",
        )
        .bind(player_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(RecordedSearch {
                    id: row.id,
                    player_id: row.player_id,
                    params: serde_json::from_value(row.params)?,
                    created_at: row.created_at,
                })
            })
            .collect()
    }
}
