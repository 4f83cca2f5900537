//! Mission renderer
//!
//! Renders mission results and failures to plain text.

pub mod renderer;

pub use renderer::{
    loading_text, render_error, render_github_user, render_pokemon, render_posts, render_user,
    render_weather,
};
