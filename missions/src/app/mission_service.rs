//! Mission service
//!
//! One operation per mission. Each validates its input locally, issues a
//! single request through the JSON fetch helper, and extracts the fields the
//! mission shows into a render model. Missions share no state.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Serialize;
use urlencoding::encode;

use crate::app::action_parser::{help_text, MissionAction};
use crate::config::Config;
use crate::domain::entities::{Forecast, GithubUser, Pokemon, Post, User};
use crate::domain::ports::{decode, JsonSource};
use crate::error::MissionError;
use crate::render;

/// Posts mission result, in response order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsView {
    pub entries: Vec<PostEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostEntry {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserView {
    pub name: String,
    pub email: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonView {
    pub id: i64,
    pub name: String,
    /// Front sprite, absent for some forms
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub location: String,
    pub temperature: f64,
    pub unit: String,
    pub is_day: Option<bool>,
    pub observed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GithubUserView {
    pub login: String,
    pub public_repos: u64,
    pub followers: u64,
    pub avatar_url: String,
}

/// Service running the missions against a JSON source
pub struct MissionService<S>
where
    S: JsonSource,
{
    source: Arc<S>,
    config: Config,
}

impl<S> MissionService<S>
where
    S: JsonSource,
{
    pub fn new(source: Arc<S>, config: Config) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === URLs ===

    pub fn posts_url(&self) -> String {
        format!(
            "{}/posts?_limit={}",
            self.config.posts_api_url, self.config.post_limit
        )
    }

    pub fn user_url(&self, id: i64) -> String {
        format!("{}/users/{}", self.config.posts_api_url, id)
    }

    /// PokeAPI only knows lowercase names
    pub fn pokemon_url(&self, name: &str) -> String {
        format!(
            "{}/pokemon/{}",
            self.config.pokeapi_url,
            encode(&name.to_lowercase())
        )
    }

    pub fn weather_url(&self) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current=temperature_2m,is_day&timezone={}",
            self.config.weather_api_url,
            self.config.weather_latitude,
            self.config.weather_longitude,
            encode(&self.config.weather_timezone)
        )
    }

    pub fn github_user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.config.github_api_url, encode(username))
    }

    // === Missions ===

    /// Mission 1: list the first posts
    pub async fn list_posts(&self) -> Result<PostsView, MissionError> {
        let posts: Vec<Post> = self.fetch("posts", &self.posts_url()).await?;

        Ok(PostsView {
            entries: posts
                .into_iter()
                .map(|p| PostEntry {
                    id: p.id,
                    title: p.title,
                })
                .collect(),
        })
    }

    /// Mission 2: look up a user by ID
    pub async fn user_by_id(&self, input: &str) -> Result<UserView, MissionError> {
        let id = parse_user_id(input)?;
        let user: User = self.fetch("user", &self.user_url(id)).await?;

        Ok(UserView {
            name: user.name,
            email: user.email,
            city: user.address.city,
        })
    }

    /// Mission 3: look up a Pokémon by name
    pub async fn pokemon_by_name(&self, input: &str) -> Result<PokemonView, MissionError> {
        let name = required(input, "Pokémon name")?;
        let pokemon: Pokemon = self.fetch("pokemon", &self.pokemon_url(name)).await?;

        Ok(PokemonView {
            id: pokemon.id,
            name: pokemon.name,
            image_url: pokemon.sprites.front_default,
        })
    }

    /// Mission 4: current weather for the configured location
    pub async fn current_weather(&self) -> Result<WeatherView, MissionError> {
        let forecast: Forecast = self.fetch("weather", &self.weather_url()).await?;

        Ok(WeatherView {
            location: self.config.weather_location.clone(),
            temperature: forecast.current.temperature_2m,
            unit: forecast.temperature_unit().to_string(),
            is_day: forecast.current.is_daytime(),
            observed_at: forecast.current.observed_at(),
        })
    }

    /// Mission 5: look up a GitHub profile
    pub async fn github_user(&self, input: &str) -> Result<GithubUserView, MissionError> {
        let username = required(input, "GitHub username")?;
        let user: GithubUser = self
            .fetch("github", &self.github_user_url(username))
            .await?;

        Ok(GithubUserView {
            login: user.login,
            public_repos: user.public_repos,
            followers: user.followers,
            avatar_url: user.avatar_url,
        })
    }

    // === Dispatch ===

    /// Run an action and render its result
    pub async fn perform(&self, action: &MissionAction) -> Result<String, MissionError> {
        let result = match action {
            MissionAction::Posts => self.list_posts().await.map(|v| render::render_posts(&v)),
            MissionAction::User { id } => {
                self.user_by_id(id).await.map(|v| render::render_user(&v))
            }
            MissionAction::Pokemon { name } => self
                .pokemon_by_name(name)
                .await
                .map(|v| render::render_pokemon(&v)),
            MissionAction::Weather => self
                .current_weather()
                .await
                .map(|v| render::render_weather(&v)),
            MissionAction::Github { username } => self
                .github_user(username)
                .await
                .map(|v| render::render_github_user(&v)),
            MissionAction::Help => Ok(help_text().to_string()),
        };

        if let Err(e) = &result {
            if e.is_warning() {
                tracing::debug!(mission = action.name(), "Mission skipped: {}", e);
            } else {
                tracing::warn!(mission = action.name(), "Mission failed: {}", e);
            }
        }

        result
    }

    /// Run an action and render either its result or its failure
    pub async fn execute(&self, action: &MissionAction) -> String {
        match self.perform(action).await {
            Ok(output) => output,
            Err(e) => render::render_error(&e),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, mission: &str, url: &str) -> Result<T, MissionError> {
        tracing::debug!(mission, url, "Fetching");
        let value = self.source.get_json(url).await?;
        decode(value).map_err(MissionError::UnexpectedShape)
    }
}

fn parse_user_id(input: &str) -> Result<i64, MissionError> {
    match input.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(MissionError::InvalidInput(
            "User ID must be a number greater than 0".to_string(),
        )),
    }
}

fn required<'a>(input: &'a str, field: &'static str) -> Result<&'a str, MissionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MissionError::MissingInput(field));
    }
    Ok(trimmed)
}
