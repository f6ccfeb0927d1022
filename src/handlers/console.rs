// src/handlers/console.rs
// DOCUMENTATION: Interactive navigation loop
// PURPOSE: Show the menu, run the chosen form, render its outcomes

use crate::config::GraphQlMode;
use crate::handlers::forms::SecretReader;
use crate::handlers::{actions, render_all, Outcome, Prompter};
use crate::models::{LoginRequest, Place, RegisterRequest};
use crate::services::{PlacesApiClient, Session};
use std::io::{self, BufRead, Write};

/// Navigation choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    SavePlace,
    SearchPlaces,
    SearchPlacesByUser,
    OpenGraphQlInterface,
    Quit,
}

impl MenuChoice {
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Register => "Register",
            MenuChoice::Login => "Login",
            MenuChoice::SavePlace => "Save Place",
            MenuChoice::SearchPlaces => "Search Places",
            MenuChoice::SearchPlacesByUser => "Search Places by User",
            MenuChoice::OpenGraphQlInterface => "Open GraphQL Interface",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Menu entries for a capability mode, in display order
    pub fn available(mode: GraphQlMode) -> Vec<MenuChoice> {
        let graphql = match mode {
            GraphQlMode::InApp => MenuChoice::SearchPlacesByUser,
            GraphQlMode::Browser => MenuChoice::OpenGraphQlInterface,
        };
        vec![
            MenuChoice::Register,
            MenuChoice::Login,
            MenuChoice::SavePlace,
            MenuChoice::SearchPlaces,
            graphql,
            MenuChoice::Quit,
        ]
    }

    /// Resolve user input: a 1-based menu number or an entry name
    pub fn parse(input: &str, mode: GraphQlMode) -> Option<MenuChoice> {
        let choices = Self::available(mode);
        let input = input.trim();

        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| choices.get(i).copied());
        }

        let wanted = normalize(input);
        if matches!(wanted.as_str(), "q" | "exit") {
            return Some(MenuChoice::Quit);
        }
        choices.into_iter().find(|c| normalize(c.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Interactive console over any input/output pair
pub struct Console<R, W> {
    client: PlacesApiClient,
    session: Session,
    mode: GraphQlMode,
    color: bool,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(client: PlacesApiClient, mode: GraphQlMode, color: bool, input: R, output: W) -> Self {
        Self {
            client,
            session: Session::new(),
            mode,
            color,
            prompter: Prompter::new(input, output),
        }
    }

    /// Read password fields with `reader` instead of the echoed input
    pub fn with_secret_reader(mut self, reader: SecretReader) -> Self {
        self.prompter = self.prompter.with_secret_reader(reader);
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until Quit or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        log::info!("Console started (GraphQL mode: {})", self.mode);

        loop {
            self.print_menu()?;

            let Some(raw) = self.prompter.ask("Go to")? else {
                break;
            };
            if raw.trim().is_empty() {
                continue;
            }

            let Some(choice) = MenuChoice::parse(&raw, self.mode) else {
                let outcomes = [Outcome::Error(format!("Unknown choice: {}", raw.trim()))];
                render_all(&outcomes, self.prompter.output(), self.color)?;
                continue;
            };

            if choice == MenuChoice::Quit {
                break;
            }

            writeln!(self.prompter.output(), "\n== {} ==", choice.label())?;
            match self.dispatch(choice).await? {
                Some(outcomes) => render_all(&outcomes, self.prompter.output(), self.color)?,
                None => break,
            }
        }

        writeln!(self.prompter.output(), "Bye.")?;
        Ok(())
    }

    /// Run one form; `None` when input ended mid-form
    pub async fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Option<Vec<Outcome>>> {
        let outcomes = match choice {
            MenuChoice::Register => {
                let Some([username, email]) = self.prompter.ask_all(["Username", "Email"])? else {
                    return Ok(None);
                };
                let Some(password) = self.prompter.ask_secret("Password")? else {
                    return Ok(None);
                };
                let request = RegisterRequest {
                    username,
                    email,
                    password,
                };
                actions::register(&self.client, &request).await
            }
            MenuChoice::Login => {
                let Some([username]) = self.prompter.ask_all(["Username"])? else {
                    return Ok(None);
                };
                let Some(password) = self.prompter.ask_secret("Password")? else {
                    return Ok(None);
                };
                let request = LoginRequest { username, password };
                actions::login(&self.client, &mut self.session, &request).await
            }
            MenuChoice::SavePlace => {
                // Checked before prompting so nobody types a whole place in vain
                if !self.session.is_authenticated() {
                    return Ok(Some(vec![Outcome::Warning("Please log in first.".to_string())]));
                }
                let Some([name, address, latitude, longitude, photo_reference]) = self
                    .prompter
                    .ask_all(["Place Name", "Address", "Latitude", "Longitude", "Photo Reference"])?
                else {
                    return Ok(None);
                };
                let place = Place {
                    name,
                    address,
                    latitude,
                    longitude,
                    photo_reference,
                };
                actions::save_place(&self.client, &self.session, &place).await
            }
            MenuChoice::SearchPlaces => {
                let Some(query) = self.prompter.ask("Enter a query to search places")? else {
                    return Ok(None);
                };
                actions::search_places(&self.client, &query).await
            }
            MenuChoice::SearchPlacesByUser => {
                let Some(username) = self.prompter.ask("Username")? else {
                    return Ok(None);
                };
                actions::search_places_by_user(&self.client, &username).await
            }
            MenuChoice::OpenGraphQlInterface => actions::open_graphql_interface(self.client.graphql_url()),
            MenuChoice::Quit => Vec::new(),
        };
        Ok(Some(outcomes))
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let status = match (self.session.username(), self.session.authenticated_at()) {
            (Some(user), Some(at)) => format!("Logged in as {} since {}", user, at.format("%H:%M UTC")),
            _ if self.session.is_authenticated() => "Logged in".to_string(),
            _ => "Not logged in".to_string(),
        };

        let out = self.prompter.output();
        writeln!(out, "\n🗺️  Places Console ({})", status)?;
        for (i, choice) in MenuChoice::available(self.mode).iter().enumerate() {
            writeln!(out, "  {}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }
}
