//! Client and schemas for PokéAPI.

pub mod client;
pub mod types;

pub use client::PokeApiClient;
