// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default REST API base URL
pub const DEFAULT_API_URL: &str = "https://api-298313983231.us-central1.run.app/api";

/// Default GraphQL endpoint (also served as a GraphiQL console in browsers)
pub const DEFAULT_GRAPHQL_URL: &str = "https://api-298313983231.us-central1.run.app/graphql/";

/// How the GraphQL capability is exposed in the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GraphQlMode {
    /// In-app "Search Places by User" form
    #[default]
    InApp,
    /// "Open GraphQL Interface" redirect to an external browser
    Browser,
}

impl FromStr for GraphQlMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-app" | "in_app" | "inapp" | "query" => Ok(GraphQlMode::InApp),
            "browser" | "external" | "link" => Ok(GraphQlMode::Browser),
            other => Err(format!("unknown GraphQL mode: {}", other)),
        }
    }
}

impl fmt::Display for GraphQlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphQlMode::InApp => write!(f, "in-app"),
            GraphQlMode::Browser => write!(f, "browser"),
        }
    }
}

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup, then apply CLI overrides
#[derive(Debug, Clone)]
pub struct Config {
    /// REST API base URL, without trailing slash
    /// Format: https://host[:port]/prefix
    pub api_base_url: String,

    /// GraphQL endpoint URL
    pub graphql_url: String,

    /// Whether GraphQL is an in-app form or an external browser link
    pub graphql_mode: GraphQlMode,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Disable ANSI colours in console output
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    /// Fails on values that cannot be interpreted (e.g. an unknown GRAPHQL_MODE)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let graphql_mode = match lookup("GRAPHQL_MODE") {
            Some(raw) => raw
                .parse::<GraphQlMode>()
                .map_err(|e| format!("GRAPHQL_MODE: {} (expected in-app or browser)", e))?,
            None => GraphQlMode::InApp,
        };

        Ok(Config {
            api_base_url: lookup("PLACES_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),

            graphql_url: lookup("GRAPHQL_URL").unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string()),

            graphql_mode,

            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "warn".to_string()),

            // Presence alone disables colour, per the NO_COLOR convention
            no_color: lookup("NO_COLOR").map(|v| !v.is_empty()).unwrap_or(false),
        })
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures the client can issue requests at all.
    /// Call after logging is initialized; insecure setups are only warned about
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("PLACES_API_URL is required".to_string());
        }

        Url::parse(&self.api_base_url)
            .map_err(|e| format!("PLACES_API_URL is not a valid URL: {}", e))?;

        Url::parse(&self.graphql_url)
            .map_err(|e| format!("GRAPHQL_URL is not a valid URL: {}", e))?;

        if self.api_base_url.starts_with("http://") && self.environment == "production" {
            log::warn!("PLACES_API_URL uses plain http in production - tokens travel unencrypted");
        }

        Ok(())
    }
}
