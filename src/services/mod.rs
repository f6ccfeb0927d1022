// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod browser;
pub mod places_api_client;
pub mod session;

pub use places_api_client::PlacesApiClient;
pub use session::Session;
