use multiverse_remote::{marvel, pokeapi, rickandmorty};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Upstream API endpoints and credentials.
///
/// Base URLs default to the public services and are overridable so tests
/// can point the clients at a stub server. The Marvel key pair has no
/// default: a missing key is a startup failure, not a request-time one.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub marvel_base_url: String,
    pub marvel_public_key: String,
    pub marvel_private_key: String,
    pub pokeapi_base_url: String,
    pub rickandmorty_base_url: String,
}

impl UpstreamConfig {
    /// Load upstream configuration from environment variables.
    ///
    /// Panics when `MARVEL_PUBLIC_KEY` or `MARVEL_PRIVATE_KEY` is unset;
    /// misconfiguration should fail fast at startup.
    pub fn from_env() -> Self {
        Self {
            marvel_base_url: std::env::var("MARVEL_BASE_URL")
                .unwrap_or_else(|_| marvel::client::DEFAULT_BASE_URL.into()),
            marvel_public_key: std::env::var("MARVEL_PUBLIC_KEY")
                .expect("MARVEL_PUBLIC_KEY must be set"),
            marvel_private_key: std::env::var("MARVEL_PRIVATE_KEY")
                .expect("MARVEL_PRIVATE_KEY must be set"),
            pokeapi_base_url: std::env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| pokeapi::client::DEFAULT_BASE_URL.into()),
            rickandmorty_base_url: std::env::var("RICKANDMORTY_BASE_URL")
                .unwrap_or_else(|_| rickandmorty::DEFAULT_BASE_URL.into()),
        }
    }
}
