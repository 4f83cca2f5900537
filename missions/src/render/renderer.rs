//! Text renderer
//!
//! Turns render models into the text each front end prints.

use crate::app::{
    GithubUserView, MissionAction, PokemonView, PostEntry, PostsView, UserView, WeatherView,
};
use crate::error::MissionError;

/// Render the posts list, one `#id - title` line per post
pub fn render_posts(view: &PostsView) -> String {
    if view.entries.is_empty() {
        return "No posts found.".to_string();
    }

    view.entries
        .iter()
        .map(render_post_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_post_entry(entry: &PostEntry) -> String {
    format!("#{} - {}", entry.id, entry.title)
}

pub fn render_user(view: &UserView) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("Name: {}\n", view.name));
    buf.push_str(&format!("Email: {}\n", view.email));
    buf.push_str(&format!("City: {}", view.city));
    buf
}

pub fn render_pokemon(view: &PokemonView) -> String {
    let image = view.image_url.as_deref().unwrap_or("none");
    format!("#{} {}\nImage: {}", view.id, view.name, image)
}

pub fn render_weather(view: &WeatherView) -> String {
    let mut buf = format!("{}: {:.1} {}", view.location, view.temperature, view.unit);

    match view.is_day {
        Some(true) => buf.push_str(" (day)"),
        Some(false) => buf.push_str(" (night)"),
        None => {}
    }

    if let Some(at) = view.observed_at {
        buf.push_str(&format!("\nObserved at {}", at.format("%Y-%m-%d %H:%M")));
    }

    buf
}

pub fn render_github_user(view: &GithubUserView) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("Login: {}\n", view.login));
    buf.push_str(&format!("Public repos: {}\n", view.public_repos));
    buf.push_str(&format!("Followers: {}\n", view.followers));
    buf.push_str(&format!("Avatar: {}", view.avatar_url));
    buf
}

/// Render a failure; missing input is a warning, everything else an error
pub fn render_error(error: &MissionError) -> String {
    if error.is_warning() {
        format!("Warning: {}", error)
    } else {
        format!("Error: {}", error)
    }
}

/// Text shown while a mission's request is in flight
pub fn loading_text(action: &MissionAction) -> Option<&'static str> {
    match action {
        MissionAction::Weather => Some("Loading…"),
        _ => None,
    }
}
