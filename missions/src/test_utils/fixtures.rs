//! Test fixtures
//!
//! Sample API bodies and a configuration pointing at fake hosts.

use serde_json::{json, Value};

use crate::config::Config;

/// Config whose base URLs never resolve, so only mocks answer
pub fn test_config() -> Config {
    Config {
        posts_api_url: "http://posts.test".to_string(),
        pokeapi_url: "http://poke.test".to_string(),
        weather_api_url: "http://weather.test".to_string(),
        github_api_url: "http://github.test".to_string(),
        ..Config::default()
    }
}

/// `count` posts titled "a", "b", "c"...
pub fn posts_json(count: usize) -> Value {
    let posts: Vec<Value> = (0..count)
        .map(|i| {
            let title = char::from(b'a' + (i % 26) as u8).to_string();
            json!({
                "userId": 1,
                "id": i + 1,
                "title": title,
                "body": "quia et suscipit",
            })
        })
        .collect();
    Value::Array(posts)
}

pub fn user_json() -> Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        },
        "phone": "1-770-736-8031 x56442"
    })
}

pub fn pokemon_json() -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "back_default": null
        }
    })
}

pub fn forecast_json() -> Value {
    json!({
        "latitude": 42.5,
        "longitude": 1.52,
        "timezone": "Europe/Andorra",
        "current_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature_2m": "°C",
            "is_day": ""
        },
        "current": {
            "time": "2024-01-15T12:00",
            "interval": 900,
            "temperature_2m": 7.3,
            "is_day": 1
        }
    })
}

pub fn github_user_json() -> Value {
    json!({
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "type": "User",
        "name": "The Octocat",
        "public_repos": 8,
        "followers": 9000,
        "following": 9
    })
}
