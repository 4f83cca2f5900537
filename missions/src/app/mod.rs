//! Application layer
//!
//! Contains the missions and the command parser that selects them.

pub mod action_parser;
pub mod mission_service;

pub use action_parser::{help_text, parse_action, MissionAction};
pub use mission_service::{
    GithubUserView, MissionService, PokemonView, PostEntry, PostsView, UserView, WeatherView,
};
