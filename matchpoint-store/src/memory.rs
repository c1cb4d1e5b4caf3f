//! In-memory repositories backing API tests and local development without
//! a database.

use async_trait::async_trait;
use chrono::Utc;
use matchpoint_core::repository::{FavoriteRepository, RecordedSearch, TournamentRepository};
use matchpoint_core::tournament::{Tournament, TournamentQuery};
use matchpoint_core::travel::TravelSearchParams;
use std::collections::HashSet;
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryTournamentRepository {
    tournaments: Vec<Tournament>,
}

impl InMemoryTournamentRepository {
    pub fn new(mut tournaments: Vec<Tournament>) -> Self {
        tournaments.sort_by_key(|t| t.start_date);
        Self { tournaments }
    }
}

#[async_trait]
impl TournamentRepository for InMemoryTournamentRepository {
    async fn list(
        &self,
        query: &TournamentQuery,
    ) -> Result<Vec<Tournament>, Box<dyn std::error::Error + Send + Sync>> {
        let matches = self
            .tournaments
            .iter()
            .filter(|t| query.from.map_or(true, |from| t.start_date >= from))
            .filter(|t| query.to.map_or(true, |to| t.start_date <= to))
            .filter(|t| query.category.map_or(true, |c| t.category == c))
            .filter(|t| {
                query
                    .country
                    .as_ref()
                    .map_or(true, |country| &t.country == country)
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Tournament>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.tournaments.iter().find(|t| t.id == id).cloned())
    }
}

pub struct InMemoryFavoriteRepository {
    // Catalog copy so favorites can be resolved back to tournaments.
    tournaments: Vec<Tournament>,
    favorites: RwLock<HashSet<(Uuid, Uuid)>>,
    searches: RwLock<Vec<RecordedSearch>>,
}

impl InMemoryFavoriteRepository {
    pub fn new(tournaments: Vec<Tournament>) -> Self {
        Self {
            tournaments,
            favorites: RwLock::new(HashSet::new()),
            searches: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn add_favorite(
        &self,
        player_id: Uuid,
        tournament_id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.favorites.write().await.insert((player_id, tournament_id));
        Ok(())
    }

    async fn remove_favorite(
        &self,
        player_id: Uuid,
        tournament_id: Uuid,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.favorites.write().await.remove(&(player_id, tournament_id));
        Ok(())
    }

    async fn list_favorites(
        &self,
        player_id: Uuid,
    ) -> Result<Vec<Tournament>, Box<dyn std::error::Error + Send + Sync>> {
        let favorites = self.favorites.read().await;
        let mut result: Vec<Tournament> = self
            .tournaments
            .iter()
            .filter(|t| favorites.contains(&(player_id, t.id)))
            .cloned()
            .collect();
        result.sort_by_key(|t| t.start_date);
        Ok(result)
    }

    async fn record_search(
        &self,
        player_id: Uuid,
        params: &TravelSearchParams,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.searches.write().await.push(RecordedSearch {
            id: Uuid::new_v4(),
            player_id,
            params: params.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn recent_searches(
        &self,
        player_id: Uuid,
        limit: i64,
    ) -> Result<Vec<RecordedSearch>, Box<dyn std::error::Error + Send + Sync>> {
        let searches = self.searches.read().await;
        Ok(searches
            .iter()
            .rev()
            .filter(|s| s.player_id == player_id)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use matchpoint_core::tournament::{CourtSurface, TournamentCategory};

    fn tournament(name: &str, start: NaiveDate, category: TournamentCategory) -> Tournament {
        Tournament {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            venue: "Stade Roland Garros".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::days(13),
            category,
            surface: CourtSurface::Clay,
            venue_location: None,
        }
    }

    #[tokio::test]
    async fn test_list_filters_by_date_and_category() {
        let may = NaiveDate::from_ymd_opt(2025, 5, 25).unwrap();
        let october = NaiveDate::from_ymd_opt(2025, 10, 5).unwrap();
        let repo = InMemoryTournamentRepository::new(vec![
            tournament("Roland Garros", may, TournamentCategory::GrandSlam),
            tournament("Paris Masters", october, TournamentCategory::Masters1000),
        ]);

        let all = repo.list(&TournamentQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Roland Garros");

        let autumn = repo
            .list(&TournamentQuery {
                from: Some(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(autumn.len(), 1);
        assert_eq!(autumn[0].name, "Paris Masters");

        let slams = repo
            .list(&TournamentQuery {
                category: Some(TournamentCategory::GrandSlam),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(slams.len(), 1);
    }

    #[tokio::test]
    async fn test_favorites_roundtrip() {
        let may = NaiveDate::from_ymd_opt(2025, 5, 25).unwrap();
        let t = tournament("Roland Garros", may, TournamentCategory::GrandSlam);
        let repo = InMemoryFavoriteRepository::new(vec![t.clone()]);
        let player = Uuid::new_v4();

        repo.add_favorite(player, t.id).await.unwrap();
        let favorites = repo.list_favorites(player).await.unwrap();
        assert_eq!(favorites.len(), 1);

        repo.remove_favorite(player, t.id).await.unwrap();
        assert!(repo.list_favorites(player).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_searches_newest_first_with_limit() {
        let repo = InMemoryFavoriteRepository::new(vec![]);
        let player = Uuid::new_v4();
        for day in 20..26 {
            let params = TravelSearchParams {
                tournament_id: None,
                destination: Some("Paris".to_string()),
                origin: "Madrid".to_string(),
                passengers: 1,
                departure_date: format!("2025-05-{}", day),
                return_date: "2025-05-27".to_string(),
                preferences: None,
            };
            repo.record_search(player, &params).await.unwrap();
        }

        let recent = repo.recent_searches(player, 5).await.unwrap();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].params.departure_date, "2025-05-25");
    }
}
