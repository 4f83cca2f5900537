use std::env;

const DEFAULT_POST_LIMIT: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the mock posts/users API
    pub posts_api_url: String,
    pub pokeapi_url: String,
    pub weather_api_url: String,
    pub github_api_url: String,
    /// Number of posts requested by the posts mission
    pub post_limit: u32,
    pub weather_latitude: String,
    pub weather_longitude: String,
    pub weather_timezone: String,
    /// Display name for the weather location
    pub weather_location: String,
    /// Sent on every request; GitHub rejects requests without one
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            posts_api_url: base_url_var("POSTS_API_URL", defaults.posts_api_url),
            pokeapi_url: base_url_var("POKEAPI_URL", defaults.pokeapi_url),
            weather_api_url: base_url_var("WEATHER_API_URL", defaults.weather_api_url),
            github_api_url: base_url_var("GITHUB_API_URL", defaults.github_api_url),
            post_limit: env::var("POST_LIMIT")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.post_limit),
            weather_latitude: env::var("WEATHER_LATITUDE").unwrap_or(defaults.weather_latitude),
            weather_longitude: env::var("WEATHER_LONGITUDE")
                .unwrap_or(defaults.weather_longitude),
            weather_timezone: env::var("WEATHER_TIMEZONE").unwrap_or(defaults.weather_timezone),
            weather_location: env::var("WEATHER_LOCATION").unwrap_or(defaults.weather_location),
            user_agent: env::var("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_api_url: "https://jsonplaceholder.typicode.com".to_string(),
            pokeapi_url: "https://pokeapi.co/api/v2".to_string(),
            weather_api_url: "https://api.open-meteo.com/v1".to_string(),
            github_api_url: "https://api.github.com".to_string(),
            post_limit: DEFAULT_POST_LIMIT,
            weather_latitude: "42.5078".to_string(),
            weather_longitude: "1.5211".to_string(),
            weather_timezone: "Europe/Andorra".to_string(),
            weather_location: "Andorra la Vella".to_string(),
            user_agent: format!("fetch-missions/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn base_url_var(name: &str, default: String) -> String {
    env::var(name)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or(default)
}
