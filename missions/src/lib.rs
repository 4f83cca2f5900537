//! Fetch missions
//!
//! Five one-shot missions over public JSON APIs (posts, users, Pokémon,
//! weather, GitHub profiles), built on a single JSON fetch helper.
//! Uses hexagonal (ports & adapters) architecture:
//! - `domain`: remote data shapes and the `JsonSource` port
//! - `adapters`: the reqwest-backed fetch helper
//! - `app`: missions and the command parser
//! - `render`: plain-text output

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;

#[cfg(test)]
mod test_utils;

pub use adapters::HttpJsonClient;
pub use app::{parse_action, MissionAction, MissionService};
pub use config::Config;
pub use error::{FetchError, MissionError, ParseError};
