// src/cli.rs
// DOCUMENTATION: Command line interface
// PURPOSE: Flags that override configuration, plus one-shot commands

use crate::config::{Config, GraphQlMode};
use crate::handlers::{actions, Outcome};
use crate::models::{LoginRequest, Place, RegisterRequest};
use crate::services::{PlacesApiClient, Session};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "places-console", version, about = "Register, log in, save and search places")]
pub struct Cli {
    /// REST API base URL (overrides PLACES_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// GraphQL endpoint URL (overrides GRAPHQL_URL)
    #[arg(long, global = true)]
    pub graphql_url: Option<String>,

    /// How GraphQL is offered in the menu (overrides GRAPHQL_MODE)
    #[arg(long, value_enum, global = true)]
    pub graphql_mode: Option<GraphQlMode>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Menu-driven console (default)
    Interactive,

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Prefer the PLACES_PASSWORD variable; argv shows up in `ps` and shell history
        #[arg(long, env = "PLACES_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Check credentials against the login endpoint
    Login {
        #[arg(long)]
        username: String,
        /// Prefer the PLACES_PASSWORD variable; argv shows up in `ps` and shell history
        #[arg(long, env = "PLACES_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in, then save one place
    SavePlace {
        #[arg(long)]
        username: String,
        /// Prefer the PLACES_PASSWORD variable; argv shows up in `ps` and shell history
        #[arg(long, env = "PLACES_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, allow_hyphen_values = true)]
        latitude: String,
        #[arg(long, allow_hyphen_values = true)]
        longitude: String,
        #[arg(long, default_value = "")]
        photo_reference: String,
    },

    /// Free-text place search
    Search {
        /// Text forwarded as the `q` parameter
        query: String,
    },

    /// Places saved by a user (GraphQL)
    PlacesByUser { username: String },

    /// Open the GraphiQL console in a browser
    Graphiql,
}

impl Cli {
    /// Apply command line overrides on top of environment configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.base_url {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = &self.graphql_url {
            config.graphql_url = url.clone();
        }
        if let Some(mode) = self.graphql_mode {
            config.graphql_mode = mode;
        }
        if self.no_color {
            config.no_color = true;
        }
    }
}

/// Run a non-interactive command and collect what it produced
pub async fn run_once(client: &PlacesApiClient, command: Command) -> Vec<Outcome> {
    match command {
        Command::Interactive => Vec::new(),
        Command::Register {
            username,
            email,
            password,
        } => {
            let request = RegisterRequest {
                username,
                email,
                password,
            };
            actions::register(client, &request).await
        }
        Command::Login { username, password } => {
            let mut session = Session::new();
            actions::login(client, &mut session, &LoginRequest { username, password }).await
        }
        Command::SavePlace {
            username,
            password,
            name,
            address,
            latitude,
            longitude,
            photo_reference,
        } => {
            let mut session = Session::new();
            let mut outcomes =
                actions::login(client, &mut session, &LoginRequest { username, password }).await;
            if !session.is_authenticated() {
                return outcomes;
            }

            let place = Place {
                name,
                address,
                latitude,
                longitude,
                photo_reference,
            };
            outcomes.extend(actions::save_place(client, &session, &place).await);
            outcomes
        }
        Command::Search { query } => actions::search_places(client, &query).await,
        Command::PlacesByUser { username } => actions::search_places_by_user(client, &username).await,
        Command::Graphiql => actions::open_graphql_interface(client.graphql_url()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockApi;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_password_flags_read_environment() {
        let cli = Cli::command();
        for name in ["register", "login", "save-place"] {
            let sub = cli.find_subcommand(name).unwrap();
            let password = sub
                .get_arguments()
                .find(|a| a.get_id() == "password")
                .unwrap();
            assert_eq!(
                password.get_env().and_then(|v| v.to_str()),
                Some("PLACES_PASSWORD"),
                "{} should accept the password from the environment",
                name
            );
        }
    }

    #[test]
    fn test_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["places-console"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "places-console",
            "--base-url",
            "http://localhost:8000/api/",
            "--graphql-mode",
            "browser",
            "search",
            "cafe",
        ])
        .unwrap();
        let mut config = Config::from_lookup(|_| None).unwrap();
        cli.apply_overrides(&mut config);

        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.graphql_mode, GraphQlMode::Browser);
        assert!(matches!(cli.command, Some(Command::Search { ref query }) if query == "cafe"));
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::try_parse_from([
            "places-console",
            "save-place",
            "--username",
            "alice",
            "--password",
            "pw",
            "--name",
            "Opera House",
            "--latitude",
            "-33.8568",
            "--longitude",
            "151.2153",
        ])
        .unwrap();

        match cli.command {
            Some(Command::SavePlace { latitude, address, .. }) => {
                assert_eq!(latitude, "-33.8568");
                assert_eq!(address, "");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[actix_rt::test]
    async fn test_save_place_stops_after_failed_login() {
        let api = MockApi::builder()
            .json("/login/", 400, json!({"error": "No active account found"}))
            .start()
            .await;
        let client = PlacesApiClient::new(api.base_url.clone(), api.graphql_url()).unwrap();

        let outcomes = run_once(
            &client,
            Command::SavePlace {
                username: "alice".to_string(),
                password: "bad".to_string(),
                name: "X".to_string(),
                address: String::new(),
                latitude: "1".to_string(),
                longitude: "2".to_string(),
                photo_reference: String::new(),
            },
        )
        .await;

        assert_eq!(outcomes, vec![Outcome::Error("No active account found".to_string())]);
        let requests = api.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/login/");
        api.stop().await;
    }
}
