//! Multiverse API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! sync layer) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod projections;
pub mod router;
pub mod routes;
pub mod state;
pub mod sync;
