//! Domain entities
//!
//! Typed views of the JSON shapes owned by the remote APIs.

pub mod github_user;
pub mod pokemon;
pub mod post;
pub mod user;
pub mod weather;

pub use github_user::GithubUser;
pub use pokemon::{Pokemon, Sprites};
pub use post::Post;
pub use user::{Address, User};
pub use weather::{CurrentUnits, CurrentWeather, Forecast, OPEN_METEO_TIME_FORMAT};
