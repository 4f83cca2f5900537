//! Action parser for mission text commands
//!
//! Parses commands like "posts", "user 3", "pokemon pikachu". Arguments are
//! passed through raw; validating them is the mission's job so that a
//! missing argument gets the same local warning as an empty input field.

use crate::error::ParseError;

/// Missions that can be triggered via text commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionAction {
    /// List the first posts
    Posts,

    /// Look up a user by numeric ID
    User { id: String },

    /// Look up a Pokémon by name
    Pokemon { name: String },

    /// Current weather for the configured location
    Weather,

    /// Look up a GitHub profile
    Github { username: String },

    /// Get help on available commands
    Help,
}

impl MissionAction {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            MissionAction::Posts => "posts",
            MissionAction::User { .. } => "user",
            MissionAction::Pokemon { .. } => "pokemon",
            MissionAction::Weather => "weather",
            MissionAction::Github { .. } => "github",
            MissionAction::Help => "help",
        }
    }
}

/// Parse a mission action from text input
pub fn parse_action(input: &str) -> Result<MissionAction, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    // Command word, then the rest of the line as a single argument
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command.to_lowercase().as_str() {
        "posts" | "post" => Ok(MissionAction::Posts),

        "user" | "users" => Ok(MissionAction::User {
            id: rest.to_string(),
        }),

        "pokemon" | "poke" | "pokémon" => Ok(MissionAction::Pokemon {
            name: rest.to_string(),
        }),

        "weather" | "meteo" => Ok(MissionAction::Weather),

        "github" | "gh" => Ok(MissionAction::Github {
            username: rest.to_string(),
        }),

        "help" | "?" => Ok(MissionAction::Help),

        _ => Err(ParseError::UnknownCommand(command.to_string())),
    }
}

/// Help text listing all commands
pub fn help_text() -> &'static str {
    r#"Missions:
  posts               List the first posts
  user <id>           Show a user's name, email and city
  pokemon <name>      Show a Pokémon's number, name and sprite
  weather             Show the current temperature
  github <username>   Show a GitHub profile
  help                Show this message"#
}
