// src/handlers/actions.rs
// DOCUMENTATION: Form submissions
// PURPOSE: Call one service operation per submit and collect the outcomes

use crate::handlers::Outcome;
use crate::models::{LoginRequest, Place, RegisterRequest};
use crate::services::{browser, PlacesApiClient, Session};

/// Register form submitted
pub async fn register(client: &PlacesApiClient, request: &RegisterRequest) -> Vec<Outcome> {
    match client.register(request).await {
        Ok(()) => vec![Outcome::Success("User registered successfully!".to_string())],
        Err(e) => Outcome::from_error(&e),
    }
}

/// Login form submitted
pub async fn login(client: &PlacesApiClient, session: &mut Session, request: &LoginRequest) -> Vec<Outcome> {
    match client.login(session, request).await {
        Ok(()) => vec![Outcome::Success("Login successful!".to_string())],
        Err(e) => Outcome::from_error(&e),
    }
}

/// Save Place form submitted
pub async fn save_place(client: &PlacesApiClient, session: &Session, place: &Place) -> Vec<Outcome> {
    let mut outcomes: Vec<Outcome> = if session.is_authenticated() {
        place.coordinate_warnings().into_iter().map(Outcome::Warning).collect()
    } else {
        Vec::new()
    };

    match client.save_place(session, place).await {
        Ok(()) => outcomes.push(Outcome::Success("Place saved successfully!".to_string())),
        Err(e) => outcomes.extend(Outcome::from_error(&e)),
    }
    outcomes
}

/// Search form submitted
pub async fn search_places(client: &PlacesApiClient, query: &str) -> Vec<Outcome> {
    match client.search_places(query).await {
        Ok(data) => vec![Outcome::Success("Search results:".to_string()), Outcome::Json(data)],
        Err(e) => Outcome::from_error(&e),
    }
}

/// Search Places by User form submitted
pub async fn search_places_by_user(client: &PlacesApiClient, username: &str) -> Vec<Outcome> {
    let result = match client.search_places_by_user(username).await {
        Ok(result) => result,
        Err(e) => return Outcome::from_error(&e),
    };

    let mut outcomes = Vec::new();
    if let Some(reason) = result.parse_error {
        outcomes.push(Outcome::Error("Failed to parse the GraphQL response.".to_string()));
        outcomes.push(Outcome::Detail(reason));
    }
    if let Some(messages) = result.server_errors {
        outcomes.push(Outcome::Warning(format!("Server reported: {}", messages)));
    }

    if result.places.is_empty() {
        outcomes.push(Outcome::Info(format!("No places found for user {}.", username)));
    } else {
        outcomes.push(Outcome::Success(format!(
            "Found {} place(s) saved by {}:",
            result.places.len(),
            username
        )));
        outcomes.push(Outcome::Places(result.places));
    }
    outcomes
}

/// Open GraphQL Interface selected
pub fn open_graphql_interface(url: &str) -> Vec<Outcome> {
    let mut outcomes = match browser::open_graphql_interface(url) {
        Ok(()) => vec![Outcome::Success("Opened the GraphQL interface in your browser.".to_string())],
        Err(e) => Outcome::from_error(&e),
    };
    outcomes.push(Outcome::Detail(format!("GraphiQL: {}", url)));
    outcomes
}
