//! REST client for PokéAPI (unauthenticated).

use crate::error::RemoteError;
use crate::http::parse_json;
use crate::pokeapi::types::{PokemonListResponse, PokemonRecord, SpeciesRecord};

/// Production base URL for PokéAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP client for PokéAPI.
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Page of pokémon name/URL references.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<PokemonListResponse, RemoteError> {
        let response = self
            .client
            .get(format!("{}/pokemon", self.base_url))
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;
        parse_json(response).await
    }

    /// Full pokémon record by numeric id or name.
    pub async fn get_pokemon(&self, id_or_name: &str) -> Result<PokemonRecord, RemoteError> {
        let response = self
            .client
            .get(format!("{}/pokemon/{id_or_name}", self.base_url))
            .send()
            .await?;
        parse_json(response).await
    }

    /// Fetch a pokémon record from an absolute URL, as handed out by the
    /// list endpoint.
    pub async fn get_pokemon_by_url(&self, url: &str) -> Result<PokemonRecord, RemoteError> {
        let response = self.client.get(url).send().await?;
        parse_json(response).await
    }

    /// Species record from the absolute URL embedded in a pokémon record.
    pub async fn get_species(&self, url: &str) -> Result<SpeciesRecord, RemoteError> {
        let response = self.client.get(url).send().await?;
        parse_json(response).await
    }
}
