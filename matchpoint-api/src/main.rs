use matchpoint_api::{app, AppState};
use matchpoint_engine::RecommendationEngine;
use matchpoint_supply::{FlightSupplier, HotelSupplier};
use matchpoint_store::{DbClient, PgFavoriteRepository, PgTournamentRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matchpoint_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = matchpoint_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Matchpoint API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let state = AppState {
        tournaments: Arc::new(PgTournamentRepository::new(db.pool.clone())),
        favorites: Arc::new(PgFavoriteRepository::new(db.pool.clone())),
        engine: Arc::new(RecommendationEngine::with_top_n(config.recommendation.top_n)),
        flight_supplier: Arc::new(FlightSupplier::new()),
        hotel_supplier: Arc::new(HotelSupplier::new()),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
