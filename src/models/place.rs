// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Bodies for /save-place/ and the GraphQL placesByUser result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Place submitted to POST /save-place/
/// DOCUMENTATION: All fields travel as the raw text the user typed.
/// Coordinates are not parsed; the remote API owns their interpretation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    /// Place name
    pub name: String,

    /// Physical street address
    pub address: String,

    /// Latitude as entered
    pub latitude: String,

    /// Longitude as entered
    pub longitude: String,

    /// Photo reference (e.g. a Google Places photo_reference)
    pub photo_reference: String,
}

impl Place {
    /// Advisory notes for coordinates that do not look numeric
    /// DOCUMENTATION: Never blocks a save. The console shows these as
    /// warnings before the request goes out unchanged.
    pub fn coordinate_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(w) = check_coordinate("Latitude", &self.latitude, 90.0) {
            warnings.push(w);
        }
        if let Some(w) = check_coordinate("Longitude", &self.longitude, 180.0) {
            warnings.push(w);
        }

        warnings
    }
}

fn check_coordinate(label: &str, raw: &str, limit: f64) -> Option<String> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => None,
        Ok(v) => Some(format!(
            "{} {} is outside -{}..{}; sending as entered.",
            label, v, limit, limit
        )),
        Err(_) => Some(format!(
            "{} '{}' is not a number; sending as entered.",
            label, raw
        )),
    }
}

/// Coordinate as returned by the GraphQL API
/// Some backends serialize decimals as strings, others as numbers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Number(n) => write!(f, "{}", n),
            Coordinate::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Place owned by a user, from `data.placesByUser`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPlace {
    pub name: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub latitude: Option<Coordinate>,

    #[serde(default)]
    pub longitude: Option<Coordinate>,

    #[serde(rename = "photoReference", default)]
    pub photo_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn place(lat: &str, lng: &str) -> Place {
        Place {
            name: "Cafe Central".to_string(),
            address: "Herrengasse 14, Wien".to_string(),
            latitude: lat.to_string(),
            longitude: lng.to_string(),
            photo_reference: "AbC123".to_string(),
        }
    }

    #[test]
    fn test_save_body_uses_raw_strings() {
        let body = serde_json::to_value(place("48.2104", "16.3655")).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Cafe Central",
                "address": "Herrengasse 14, Wien",
                "latitude": "48.2104",
                "longitude": "16.3655",
                "photo_reference": "AbC123"
            })
        );
    }

    #[test]
    fn test_coordinate_warnings() {
        assert!(place("48.2104", "16.3655").coordinate_warnings().is_empty());
        assert!(place(" -33.9 ", "151.2").coordinate_warnings().is_empty());

        let warnings = place("north", "200").coordinate_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Latitude 'north'"));
        assert!(warnings[1].contains("outside"));
    }

    #[test]
    fn test_user_place_accepts_number_or_text_coordinates() {
        let places: Vec<UserPlace> = serde_json::from_value(json!([
            {"name": "A", "address": "x", "latitude": 1.5, "longitude": "2.25", "photoReference": "p"},
            {"name": "B"}
        ]))
        .unwrap();

        assert_eq!(places[0].latitude, Some(Coordinate::Number(1.5)));
        assert_eq!(places[0].longitude, Some(Coordinate::Text("2.25".to_string())));
        assert_eq!(places[0].photo_reference.as_deref(), Some("p"));
        assert!(places[1].address.is_none());
        assert_eq!(Coordinate::Text("2.25".to_string()).to_string(), "2.25");
    }
}
