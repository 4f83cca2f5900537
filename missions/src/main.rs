//! Fetch Missions CLI
//!
//! Runs missions against the public APIs. Each command plays the role of a
//! button click:
//! - `fetch-missions pokemon pikachu` runs one mission and exits
//! - `fetch-missions` with no arguments reads one command per line from stdin

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fetch_missions::app::help_text;
use fetch_missions::domain::ports::JsonSource;
use fetch_missions::render::{loading_text, render_error};
use fetch_missions::{parse_action, Config, HttpJsonClient, MissionService};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout only carries mission output
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,fetch_missions=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let client = HttpJsonClient::from_config(&config).context("Failed to build HTTP client")?;
    let service = MissionService::new(Arc::new(client), config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        let succeeded = run_command(&service, &args.join(" ")).await;
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    tracing::info!("Reading missions from stdin (type 'help' for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        run_command(&service, line).await;
    }

    Ok(ExitCode::SUCCESS)
}

/// Parse and run one command, printing its output. Returns false on failure.
async fn run_command<S: JsonSource>(service: &MissionService<S>, input: &str) -> bool {
    let action = match parse_action(input) {
        Ok(action) => action,
        Err(e) => {
            println!("Error: {}", e);
            println!("{}", help_text());
            return false;
        }
    };

    if let Some(text) = loading_text(&action) {
        eprintln!("{}", text);
    }

    match service.perform(&action).await {
        Ok(output) => {
            println!("{}", output);
            true
        }
        Err(e) => {
            println!("{}", render_error(&e));
            false
        }
    }
}
