// src/models/graphql.rs
// DOCUMENTATION: GraphQL request document and response extraction
// PURPOSE: Body for POST /graphql/ and parsing of data.placesByUser

use super::UserPlace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Fixed query document for places saved by one user
pub const PLACES_BY_USER_QUERY: &str = "query getPlacesByUser($username: String!) {
  placesByUser(username: $username) {
    name
    address
    latitude
    longitude
    photoReference
  }
}";

/// GraphQL POST body: `{query, variables}`
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// Variables for PLACES_BY_USER_QUERY
#[derive(Debug, Clone, Serialize, Validate)]
pub struct PlacesByUserVariables {
    #[validate(length(min = 1, message = "Please enter a username."))]
    pub username: String,
}

/// Single entry of a GraphQL `errors` array
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Result of a placesByUser lookup
/// DOCUMENTATION: A malformed response does not fail the action; it yields
/// an empty list plus the reason in `parse_error`. GraphQL `errors` sent
/// next to a usable list are partial failures and go to `server_errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacesByUser {
    pub places: Vec<UserPlace>,
    pub parse_error: Option<String>,
    pub server_errors: Option<String>,
}

impl PlacesByUser {
    /// Decode a 200 response body
    pub fn from_body(body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(e) => return Self::malformed(format!("response is not JSON ({}): {}", e, body)),
        };

        let graphql_errors = value
            .get("errors")
            .cloned()
            .and_then(|errs| serde_json::from_value::<Vec<GraphQlError>>(errs).ok())
            .map(|errs| {
                errs.into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .filter(|joined| !joined.is_empty());

        let Some(raw_places) = value.pointer("/data/placesByUser") else {
            let reason = match graphql_errors {
                Some(msgs) => format!("data.placesByUser missing; server reported: {}", msgs),
                None => "data.placesByUser missing from response".to_string(),
            };
            return Self::malformed(reason);
        };

        match serde_json::from_value::<Vec<UserPlace>>(raw_places.clone()) {
            Ok(places) => Self {
                places,
                parse_error: None,
                server_errors: graphql_errors,
            },
            Err(e) => Self::malformed(format!("data.placesByUser is malformed: {}", e)),
        }
    }

    fn malformed(reason: String) -> Self {
        Self {
            places: Vec::new(),
            parse_error: Some(reason),
            server_errors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GraphQlRequest {
            query: PLACES_BY_USER_QUERY,
            variables: PlacesByUserVariables {
                username: "alice".to_string(),
            },
        })
        .unwrap();

        assert_eq!(body["variables"]["username"], "alice");
        assert!(body["query"].as_str().unwrap().contains("placesByUser(username: $username)"));
    }

    #[test]
    fn test_empty_username_rejected() {
        let vars = PlacesByUserVariables {
            username: String::new(),
        };
        assert!(vars.validate().is_err());
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let result = PlacesByUser::from_body(r#"{"data":{"placesByUser":[]}}"#);
        assert!(result.places.is_empty());
        assert!(result.parse_error.is_none());
        assert!(result.server_errors.is_none());
    }

    #[test]
    fn test_errors_next_to_data_are_not_parse_errors() {
        let result = PlacesByUser::from_body(
            r#"{"data":{"placesByUser":[{"name":"Park"}]},"errors":[{"message":"photo resolver timed out"}]}"#,
        );
        assert_eq!(result.places.len(), 1);
        assert!(result.parse_error.is_none());
        assert_eq!(result.server_errors.as_deref(), Some("photo resolver timed out"));
    }

    #[test]
    fn test_places_extracted() {
        let result = PlacesByUser::from_body(
            r#"{"data":{"placesByUser":[{"name":"Park","address":"Main St","latitude":"1","longitude":"2","photoReference":null}]}}"#,
        );
        assert_eq!(result.places.len(), 1);
        assert_eq!(result.places[0].name, "Park");
        assert!(result.parse_error.is_none());
    }

    #[test]
    fn test_missing_path_yields_empty_list() {
        let result = PlacesByUser::from_body(
            r#"{"data":null,"errors":[{"message":"User matching query does not exist."}]}"#,
        );
        assert!(result.places.is_empty());
        let reason = result.parse_error.unwrap();
        assert!(reason.contains("User matching query does not exist."));
    }

    #[test]
    fn test_malformed_entries_yield_empty_list() {
        let result = PlacesByUser::from_body(r#"{"data":{"placesByUser":"nope"}}"#);
        assert!(result.places.is_empty());
        assert!(result.parse_error.unwrap().contains("malformed"));

        let result = PlacesByUser::from_body("<html>");
        assert!(result.places.is_empty());
        assert!(result.parse_error.unwrap().contains("<html>"));
    }
}
