//! REST client for the Marvel Comics API.
//!
//! All calls are authenticated GETs: the rolling `ts`/`apikey`/`hash`
//! triple is recomputed per request from the injected [`Clock`].

use std::sync::Arc;

use crate::clock::Clock;
use crate::error::RemoteError;
use crate::http::parse_json;
use crate::marvel::auth;
use crate::marvel::types::{CharacterRecord, ComicRecord, DataContainer, Envelope};

/// Production base URL for the Marvel API.
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public";

/// HTTP client for the Marvel API.
pub struct MarvelClient {
    client: reqwest::Client,
    base_url: String,
    public_key: String,
    private_key: String,
    clock: Arc<dyn Clock>,
}

impl MarvelClient {
    /// Create a client for the given base URL and key pair.
    pub fn new(
        base_url: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            clock,
        }
    }

    /// List characters ordered by name. `name_starts_with` narrows the
    /// page to names with the given prefix.
    pub async fn get_characters(
        &self,
        limit: i64,
        offset: i64,
        name_starts_with: Option<&str>,
    ) -> Result<DataContainer<CharacterRecord>, RemoteError> {
        let mut params = self.auth_params();
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));
        params.push(("orderBy", "name".to_string()));
        if let Some(name) = name_starts_with {
            params.push(("nameStartsWith", name.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/characters", self.base_url))
            .query(&params)
            .send()
            .await?;

        let envelope: Envelope<CharacterRecord> = parse_json(response).await?;
        Ok(envelope.data)
    }

    /// Fetch one character by its Marvel id.
    pub async fn get_character(&self, id: i64) -> Result<CharacterRecord, RemoteError> {
        let response = self
            .client
            .get(format!("{}/characters/{id}", self.base_url))
            .query(&self.auth_params())
            .send()
            .await?;

        let envelope: Envelope<CharacterRecord> = parse_json(response).await?;
        first_result(envelope, "character")
    }

    /// List the comics a character appears in, most recent first.
    pub async fn get_character_comics(
        &self,
        id: i64,
        limit: i64,
    ) -> Result<Vec<ComicRecord>, RemoteError> {
        let mut params = self.auth_params();
        params.push(("limit", limit.to_string()));
        params.push(("orderBy", "-focDate".to_string()));

        let response = self
            .client
            .get(format!("{}/characters/{id}/comics", self.base_url))
            .query(&params)
            .send()
            .await?;

        let envelope: Envelope<ComicRecord> = parse_json(response).await?;
        Ok(envelope.data.results)
    }

    /// List comics, most recent first. `title_starts_with` narrows the
    /// page to titles with the given prefix.
    pub async fn get_comics(
        &self,
        limit: i64,
        offset: i64,
        title_starts_with: Option<&str>,
    ) -> Result<DataContainer<ComicRecord>, RemoteError> {
        let mut params = self.auth_params();
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));
        params.push(("orderBy", "-focDate".to_string()));
        if let Some(title) = title_starts_with {
            params.push(("titleStartsWith", title.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/comics", self.base_url))
            .query(&params)
            .send()
            .await?;

        let envelope: Envelope<ComicRecord> = parse_json(response).await?;
        Ok(envelope.data)
    }

    /// Fetch one comic by its Marvel id.
    pub async fn get_comic(&self, id: i64) -> Result<ComicRecord, RemoteError> {
        let response = self
            .client
            .get(format!("{}/comics/{id}", self.base_url))
            .query(&self.auth_params())
            .send()
            .await?;

        let envelope: Envelope<ComicRecord> = parse_json(response).await?;
        first_result(envelope, "comic")
    }

    /// The `ts`/`apikey`/`hash` triple, recomputed from the clock.
    fn auth_params(&self) -> Vec<(&'static str, String)> {
        let ts = self.clock.unix_timestamp().to_string();
        let hash = auth::sign(&ts, &self.private_key, &self.public_key);
        vec![
            ("ts", ts),
            ("apikey", self.public_key.clone()),
            ("hash", hash),
        ]
    }
}

/// Single-entity endpoints return a one-element results list; an empty
/// list is a shape violation.
fn first_result<T>(envelope: Envelope<T>, entity: &str) -> Result<T, RemoteError> {
    envelope
        .data
        .results
        .into_iter()
        .next()
        .ok_or_else(|| RemoteError::Malformed(format!("empty results for {entity}")))
}
