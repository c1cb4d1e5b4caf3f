use async_trait::async_trait;
use chrono::NaiveDate;
use matchpoint_core::repository::TournamentRepository;
use matchpoint_core::tournament::{Tournament, TournamentQuery};
use matchpoint_core::travel::GeoPoint;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct TournamentRow {
    id: Uuid,
    name: String,
    city: String,
    country: String,
    venue: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    category: String,
    surface: String,
    venue_lat: Option<f64>,
    venue_lng: Option<f64>,
}

impl TournamentRow {
    fn into_tournament(self) -> Result<Tournament, Box<dyn std::error::Error + Send + Sync>> {
        let venue_location = match (self.venue_lat, self.venue_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        };

        Ok(Tournament {
            id: self.id,
            name: self.name,
            city: self.city,
            country: self.country,
            venue: self.venue,
            start_date: self.start_date,
            end_date: self.end_date,
            category: self.category.parse()?,
            surface: self.surface.parse()?,
            venue_location,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, name, city, country, venue, start_date, end_date, \
     category, surface, venue_lat, venue_lng FROM tournaments";

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn list(
        &self,
        query: &TournamentQuery,
    ) -> Result<Vec<Tournament>, Box<dyn std::error::Error + Send + Sync>> {
        // Filters are optional, so the statement is assembled at runtime.
        let mut qb: QueryBuilder<sqlx::Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        qb.push(" WHERE TRUE");

        if let Some(from) = query.from {
            qb.push(" AND start_date >= ").push_bind(from);
        }
        if let Some(to) = query.to {
            qb.push(" AND start_date <= ").push_bind(to);
        }
        if let Some(category) = query.category {
            qb.push(" AND category = ").push_bind(category.as_str());
        }
        if let Some(country) = &query.country {
            qb.push(" AND country = ").push_bind(country);
        }
        qb.push(" ORDER BY start_date ASC");

        let rows: Vec<TournamentRow> = qb.build_query_as().fetch_all(&self.pool).await?;
        rows.into_iter().map(TournamentRow::into_tournament).collect()
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Tournament>, Box<dyn std::error::Error + Send + Sync>> {
        let row: Option<TournamentRow> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TournamentRow::into_tournament).transpose()
    }
}
