pub mod health;
pub mod marvel;
pub mod pokemon;
pub mod rickandmorty;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /marvel/characters                   list + sync (paged)
/// /marvel/characters/search            search by name prefix
/// /marvel/characters/{marvel_id}       refresh-or-create detail
/// /marvel/comics                       list + sync (paged)
/// /marvel/comics/search                search by title prefix
/// /marvel/comics/{marvel_id}           refresh-or-create detail
///
/// /pokemon                             list (read-through)
/// /pokemon/{id_or_name}                composed detail (read-through)
///
/// /rickandmorty/characters[/{id}]      relay
/// /rickandmorty/locations[/{id}]       relay
/// /rickandmorty/episodes[/{id}]        relay
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/marvel", marvel::router())
        .nest("/pokemon", pokemon::router())
        .nest("/rickandmorty", rickandmorty::router())
}
