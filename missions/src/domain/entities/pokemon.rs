//! Pokémon entity
//!
//! A Pokémon from PokeAPI (`GET /pokemon/{name}`). Only the fields the
//! mission shows are read; the payload is large.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Null for some forms
    pub front_default: Option<String>,
}
