// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Form surface - parse input, call services, render outcomes

pub mod actions;
pub mod console;
pub mod forms;
pub mod outcome;

pub use console::Console;
pub use forms::Prompter;
pub use outcome::{render_all, Outcome};
