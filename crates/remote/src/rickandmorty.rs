//! REST client for the Rick and Morty API (unauthenticated).
//!
//! This domain is read-through only: payloads are relayed to callers as
//! untyped JSON, so the client returns [`serde_json::Value`].

use crate::error::RemoteError;
use crate::http::parse_json;

/// Production base URL for the Rick and Morty API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// HTTP client for the Rick and Morty API.
pub struct RickAndMortyClient {
    client: reqwest::Client,
    base_url: String,
}

impl RickAndMortyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn characters(&self, page: i64) -> Result<serde_json::Value, RemoteError> {
        self.list("character", page).await
    }

    pub async fn character(&self, id: i64) -> Result<serde_json::Value, RemoteError> {
        self.detail("character", id).await
    }

    pub async fn locations(&self, page: i64) -> Result<serde_json::Value, RemoteError> {
        self.list("location", page).await
    }

    pub async fn location(&self, id: i64) -> Result<serde_json::Value, RemoteError> {
        self.detail("location", id).await
    }

    pub async fn episodes(&self, page: i64) -> Result<serde_json::Value, RemoteError> {
        self.list("episode", page).await
    }

    pub async fn episode(&self, id: i64) -> Result<serde_json::Value, RemoteError> {
        self.detail("episode", id).await
    }

    async fn list(&self, resource: &str, page: i64) -> Result<serde_json::Value, RemoteError> {
        let response = self
            .client
            .get(format!("{}/{resource}", self.base_url))
            .query(&[("page", page)])
            .send()
            .await?;
        parse_json(response).await
    }

    async fn detail(&self, resource: &str, id: i64) -> Result<serde_json::Value, RemoteError> {
        let response = self
            .client
            .get(format!("{}/{resource}/{id}", self.base_url))
            .send()
            .await?;
        parse_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn relays_upstream_payload_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let payload = serde_json::json!({
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "origin": {"name": "Earth (C-137)"},
        });
        server
            .mock("GET", "/character/1")
            .with_status(200)
            .with_body(payload.to_string())
            .create_async()
            .await;

        let client = RickAndMortyClient::new(server.url());
        let value = client.character(1).await.unwrap();

        assert_eq!(value, payload);
    }

    #[tokio::test]
    async fn unknown_id_maps_to_rejected_404() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/character/99999")
            .with_status(404)
            .with_body(r#"{"error": "Character not found"}"#)
            .create_async()
            .await;

        let client = RickAndMortyClient::new(server.url());
        let err = client.character(99999).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
    }
}
