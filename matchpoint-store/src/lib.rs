pub mod app_config;
pub mod database;
pub mod favorites_repo;
pub mod memory;
pub mod tournament_repo;

pub use database::DbClient;
pub use favorites_repo::PgFavoriteRepository;
pub use tournament_repo::PgTournamentRepository;
