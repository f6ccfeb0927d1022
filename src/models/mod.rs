// src/models/mod.rs
// DOCUMENTATION: Data models module
// PURPOSE: Request/response bodies exchanged with the remote API

pub mod auth;
pub mod graphql;
pub mod place;
pub mod search;

pub use auth::{ApiErrorBody, LoginRequest, LoginResponse, RegisterRequest};
pub use graphql::{GraphQlRequest, PlacesByUser, PlacesByUserVariables, PLACES_BY_USER_QUERY};
pub use place::{Place, UserPlace};
pub use search::SearchQuery;
