// src/services/places_api_client.rs
// DOCUMENTATION: Places REST/GraphQL API client
// PURPOSE: Issue one request per user action and classify the outcome

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{
    ApiErrorBody, GraphQlRequest, LoginRequest, LoginResponse, Place, PlacesByUser,
    PlacesByUserVariables, RegisterRequest, SearchQuery, PLACES_BY_USER_QUERY,
};
use crate::services::Session;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use validator::Validate;

/// Places API client
/// DOCUMENTATION: Stateless apart from the base URLs. The session is passed
/// into every call that needs it; nothing is retried or cached.
pub struct PlacesApiClient {
    /// HTTP client for making requests
    client: Client,
    /// REST base URL, without trailing slash
    base_url: String,
    /// GraphQL endpoint URL
    graphql_url: String,
}

impl PlacesApiClient {
    /// Create new API client
    /// DOCUMENTATION: Transport defaults apply; no timeout is configured
    pub fn new(base_url: impl Into<String>, graphql_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            graphql_url: graphql_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(config.api_base_url.clone(), config.graphql_url.clone())
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a new account
    /// DOCUMENTATION: POST /register/, success is 201
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ClientError> {
        log::debug!("Registering user {}", request.username);

        let response = self
            .client
            .post(self.endpoint("/register/"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::CREATED {
            log::info!("Registered user {}", request.username);
            return Ok(());
        }

        Err(rejection(response, "Registration failed").await)
    }

    /// Log in and store the access token in the session
    /// DOCUMENTATION: POST /login/, success is 200 with `{access, ...}`.
    /// The session is only touched on success.
    pub async fn login(&self, session: &mut Session, request: &LoginRequest) -> Result<(), ClientError> {
        log::debug!("Logging in user {}", request.username);

        let response = self
            .client
            .post(self.endpoint("/login/"))
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() != StatusCode::OK {
            return Err(rejection(response, "Login failed").await);
        }

        let body = response.text().await.map_err(transport_error)?;
        let tokens: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            log::error!("Login response has no usable access token: {}", e);
            ClientError::UnexpectedFormat { body: body.clone() }
        })?;

        if tokens.refresh.is_some() {
            log::debug!("Login returned a refresh token; only the access token is kept");
        }

        session.authenticate(&request.username, tokens.access);
        log::info!("Logged in as {}", request.username);
        Ok(())
    }

    /// Save a place on behalf of the logged-in user
    /// DOCUMENTATION: POST /save-place/ with bearer token, success is 201.
    /// Refuses locally, without any request, when the session has no token.
    pub async fn save_place(&self, session: &Session, place: &Place) -> Result<(), ClientError> {
        let token = session.token().ok_or(ClientError::NotLoggedIn)?;

        log::debug!("Saving place {}", place.name);

        let response = self
            .client
            .post(self.endpoint("/save-place/"))
            .bearer_auth(token)
            .json(place)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::CREATED {
            log::info!("Saved place {}", place.name);
            return Ok(());
        }

        Err(rejection(response, "Failed to save place").await)
    }

    /// Free-text place search
    /// DOCUMENTATION: GET /search-place?q=<query>. Blank queries are rejected
    /// locally. The payload is application-defined, so it stays as JSON.
    pub async fn search_places(&self, query: &str) -> Result<Value, ClientError> {
        let params = SearchQuery::new(query);
        params.validate()?;

        log::debug!("Searching places: q={}", params.q);

        let response = self
            .client
            .get(self.endpoint("/search-place"))
            .query(&params)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            log::error!("Search failed with status {}: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse search response: {}", e);
            ClientError::UnexpectedFormat { body }
        })
    }

    /// Places saved by one user, via GraphQL
    /// DOCUMENTATION: POST to the GraphQL endpoint with a fixed query.
    /// A 200 with an unusable body yields an empty list and a parse note.
    pub async fn search_places_by_user(&self, username: &str) -> Result<PlacesByUser, ClientError> {
        let variables = PlacesByUserVariables {
            username: username.to_string(),
        };
        variables.validate()?;

        log::debug!("GraphQL placesByUser: username={}", username);

        let response = self
            .client
            .post(&self.graphql_url)
            .json(&GraphQlRequest {
                query: PLACES_BY_USER_QUERY,
                variables,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status != StatusCode::OK {
            log::error!("GraphQL request failed with status {}: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result = PlacesByUser::from_body(&body);
        if let Some(reason) = &result.parse_error {
            log::warn!("Could not read placesByUser: {}", reason);
        }
        Ok(result)
    }
}

fn transport_error(e: reqwest::Error) -> ClientError {
    log::error!("Places API request failed: {}", e);
    ClientError::Transport(e.to_string())
}

/// Turn a non-success response into an error carrying the server's message
async fn rejection(response: Response, fallback: &str) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::error!("Places API error {}: {}", status, body);

    ClientError::Rejected {
        status: status.as_u16(),
        message: ApiErrorBody::message_from(&body).unwrap_or_else(|| fallback.to_string()),
    }
}
