//! HTTP clients for the three upstream catalog APIs.
//!
//! Each client issues single-attempt GET requests (no retry, no backoff)
//! and returns either typed records or a [`RemoteError`]. The Marvel
//! client signs every request with a rolling timestamp; the timestamp
//! source is injectable via [`clock::Clock`] so signing is deterministic
//! in tests.

pub mod clock;
pub mod error;
pub mod marvel;
pub mod pokeapi;
pub mod rickandmorty;

mod http;

pub use error::RemoteError;
