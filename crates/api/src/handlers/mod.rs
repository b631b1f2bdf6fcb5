//! Request handlers, one module per catalog domain.

pub mod marvel_characters;
pub mod marvel_comics;
pub mod pokemon;
pub mod rickandmorty;
