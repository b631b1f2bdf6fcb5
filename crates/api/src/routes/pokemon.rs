//! Route definitions for the Pokémon domain.

use axum::routing::get;
use axum::Router;

use crate::handlers::pokemon;
use crate::state::AppState;

/// Routes mounted at `/pokemon`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pokemon::list))
        .route("/{id_or_name}", get(pokemon::retrieve))
}
