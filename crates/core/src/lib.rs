//! Shared domain types and pagination helpers.

pub mod pagination;
pub mod types;
