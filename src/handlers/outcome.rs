// src/handlers/outcome.rs
// DOCUMENTATION: User-visible results of an action
// PURPOSE: Map service results and errors to rendered console lines

use crate::errors::ClientError;
use crate::models::UserPlace;
use serde_json::Value;
use std::io::{self, Write};

// --- ANSI colours for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// One rendered line (or block) of feedback
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(String),
    Error(String),
    Warning(String),
    Info(String),
    /// Diagnostic text under an error (raw body, transport detail, URL)
    Detail(String),
    /// Application-defined payload, pretty-printed
    Json(Value),
    Places(Vec<UserPlace>),
}

impl Outcome {
    /// Map an error to what the user sees
    /// DOCUMENTATION: Local refusals are warnings when they ask the user to
    /// do something first, errors otherwise; diagnostic detail follows
    pub fn from_error(err: &ClientError) -> Vec<Outcome> {
        if err.is_local() {
            log::debug!("Action refused before sending: {}", err);
        } else if let Some(status) = err.status() {
            log::debug!("Action failed with HTTP {}", status);
        }

        let headline = match err {
            ClientError::NotLoggedIn => Outcome::Warning(err.to_string()),
            _ => Outcome::Error(err.to_string()),
        };

        let mut outcomes = vec![headline];
        if let Some(detail) = err.detail() {
            outcomes.push(Outcome::Detail(detail));
        }
        outcomes
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Write this outcome to `out`
    pub fn render<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        let paint = |code: &'static str| if color { code } else { "" };
        let reset = paint(RESET);

        match self {
            Outcome::Success(msg) => writeln!(out, "{}✅ {}{}", paint(GREEN), msg, reset),
            Outcome::Error(msg) => writeln!(out, "{}❌ {}{}", paint(RED), msg, reset),
            Outcome::Warning(msg) => writeln!(out, "{}⚠️  {}{}", paint(YELLOW), msg, reset),
            Outcome::Info(msg) => writeln!(out, "{}{}{}", paint(CYAN), msg, reset),
            Outcome::Detail(msg) => writeln!(out, "   {}", msg),
            Outcome::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
                writeln!(out, "{}", pretty)
            }
            Outcome::Places(places) => {
                for (i, place) in places.iter().enumerate() {
                    writeln!(out, "{}{}. {}{}", paint(BOLD), i + 1, place.name, reset)?;
                    if let Some(address) = &place.address {
                        writeln!(out, "   📍 {}", address)?;
                    }
                    if let (Some(lat), Some(lng)) = (&place.latitude, &place.longitude) {
                        writeln!(out, "   🌐 {}, {}", lat, lng)?;
                    }
                    if let Some(photo) = place.photo_reference.as_deref().filter(|p| !p.is_empty()) {
                        writeln!(out, "   📷 {}", photo)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Render a batch of outcomes
pub fn render_all<W: Write>(outcomes: &[Outcome], out: &mut W, color: bool) -> io::Result<()> {
    for outcome in outcomes {
        outcome.render(out, color)?;
    }
    out.flush()
}
