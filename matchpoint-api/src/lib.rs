use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod compare;
pub mod dashboard;
pub mod error;
pub mod search;
pub mod state;
pub mod tournaments;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/v1/travel/search", post(search::search_travel))
        .route("/v1/tournaments", get(tournaments::list_tournaments))
        .route("/v1/tournaments/{id}", get(tournaments::get_tournament))
        .route("/v1/compare/flights", post(compare::compare_flights))
        .route("/v1/compare/hotels", post(compare::compare_hotels))
        .route("/v1/players/{id}/dashboard", get(dashboard::get_dashboard))
        .route("/v1/players/{id}/favorites", post(dashboard::add_favorite))
        .route(
            "/v1/players/{id}/favorites/{tournament_id}",
            delete(dashboard::remove_favorite),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
