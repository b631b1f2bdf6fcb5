//! Row models and upsert DTOs, one module per table.

pub mod character;
pub mod comic;
