//! Route definitions for the Rick and Morty domain.

use axum::routing::get;
use axum::Router;

use crate::handlers::rickandmorty;
use crate::state::AppState;

/// Routes mounted at `/rickandmorty`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/characters", get(rickandmorty::list_characters))
        .route("/characters/{id}", get(rickandmorty::get_character))
        .route("/locations", get(rickandmorty::list_locations))
        .route("/locations/{id}", get(rickandmorty::get_location))
        .route("/episodes", get(rickandmorty::list_episodes))
        .route("/episodes/{id}", get(rickandmorty::get_episode))
}
