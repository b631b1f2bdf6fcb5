//! Client and schemas for the Marvel Comics API.

pub mod auth;
pub mod client;
pub mod types;

pub use client::MarvelClient;
