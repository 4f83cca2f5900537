//! Fetch Missions MCP Server implementation
//!
//! Each tool runs one mission and returns its rendered text. Mission
//! failures and input warnings come back as tool errors, not protocol errors.

use std::sync::Arc;

use anyhow::{Context, Result};
use fetch_missions::render::render_error;
use fetch_missions::{Config, HttpJsonClient, MissionAction, MissionService};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Fetch Missions MCP Server
#[derive(Clone)]
pub struct MissionsServer {
    missions: Arc<MissionService<HttpJsonClient>>,
    tool_router: ToolRouter<Self>,
}

impl MissionsServer {
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env();
        let client =
            HttpJsonClient::from_config(&config).context("Failed to build HTTP client")?;
        Ok(Self::new(MissionService::new(Arc::new(client), config)))
    }

    pub fn new(missions: MissionService<HttpJsonClient>) -> Self {
        Self {
            missions: Arc::new(missions),
            tool_router: Self::tool_router(),
        }
    }

    async fn run(&self, action: MissionAction) -> Result<CallToolResult, McpError> {
        match self.missions.perform(&action).await {
            Ok(output) => Ok(CallToolResult::success(vec![Content::text(output)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(render_error(&e))])),
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserParams {
    /// User ID, 1 or greater
    pub id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PokemonParams {
    /// Pokémon name, any case (e.g. "Pikachu")
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GithubUserParams {
    /// GitHub login (e.g. "octocat")
    pub username: String,
}

#[tool_router]
impl MissionsServer {
    #[tool(description = "List the first posts from the mock posts API, one '#id - title' line each.")]
    async fn posts(&self) -> Result<CallToolResult, McpError> {
        self.run(MissionAction::Posts).await
    }

    #[tool(description = "Show a user's name, email and city by numeric ID.")]
    async fn user(&self, params: Parameters<UserParams>) -> Result<CallToolResult, McpError> {
        self.run(MissionAction::User {
            id: params.0.id.to_string(),
        })
        .await
    }

    #[tool(description = "Show a Pokémon's number, name and front sprite URL.")]
    async fn pokemon(&self, params: Parameters<PokemonParams>) -> Result<CallToolResult, McpError> {
        self.run(MissionAction::Pokemon {
            name: params.0.name,
        })
        .await
    }

    #[tool(description = "Show the current temperature for the configured location.")]
    async fn weather(&self) -> Result<CallToolResult, McpError> {
        self.run(MissionAction::Weather).await
    }

    #[tool(description = "Show a GitHub user's login, public repo count, followers and avatar URL.")]
    async fn github_user(
        &self,
        params: Parameters<GithubUserParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(MissionAction::Github {
            username: params.0.username,
        })
        .await
    }

    #[tool(description = "Show available missions.")]
    async fn help(&self) -> Result<CallToolResult, McpError> {
        self.run(MissionAction::Help).await
    }
}

#[tool_handler]
impl ServerHandler for MissionsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fetch-missions".into(),
                title: Some("Fetch Missions MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Fetch Missions - one-shot lookups against public JSON APIs

TOOLS:
- 'posts' - First posts from the mock posts API
- 'user' - User profile by numeric ID
- 'pokemon' - Pokémon by name
- 'weather' - Current temperature
- 'github_user' - GitHub profile by username

Each call issues a single GET. Failures are reported as 'Error: <message>'
(e.g. 'Error: HTTP 404'); empty inputs as 'Warning: <message>'."#
                    .into(),
            ),
        }
    }
}
