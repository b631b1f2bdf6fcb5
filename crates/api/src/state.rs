use std::sync::Arc;

use multiverse_remote::clock::SystemClock;
use multiverse_remote::marvel::MarvelClient;
use multiverse_remote::pokeapi::PokeApiClient;
use multiverse_remote::rickandmorty::RickAndMortyClient;

use crate::config::UpstreamConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: multiverse_db::DbPool,
    /// Marvel API client (signed requests).
    pub marvel: Arc<MarvelClient>,
    /// PokéAPI client.
    pub pokeapi: Arc<PokeApiClient>,
    /// Rick and Morty API client.
    pub rickandmorty: Arc<RickAndMortyClient>,
}

impl AppState {
    /// Assemble state from upstream configuration, wiring the Marvel
    /// client to the system clock.
    pub fn new(pool: multiverse_db::DbPool, upstreams: &UpstreamConfig) -> Self {
        let marvel = MarvelClient::new(
            upstreams.marvel_base_url.clone(),
            upstreams.marvel_public_key.clone(),
            upstreams.marvel_private_key.clone(),
            Arc::new(SystemClock),
        );

        Self {
            pool,
            marvel: Arc::new(marvel),
            pokeapi: Arc::new(PokeApiClient::new(upstreams.pokeapi_base_url.clone())),
            rickandmorty: Arc::new(RickAndMortyClient::new(
                upstreams.rickandmorty_base_url.clone(),
            )),
        }
    }
}
