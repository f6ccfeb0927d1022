// src/handlers/forms.rs
// DOCUMENTATION: Line-based form input
// PURPOSE: Prompt for fields one at a time over any reader/writer pair

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, Write};

/// Reads a secret field; `None` means the user abandoned input
pub type SecretReader = fn(&mut dyn Write) -> io::Result<Option<String>>;

/// Reads form fields from `input`, writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Used for password fields when set; otherwise they come from `input`
    secret_reader: Option<SecretReader>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            secret_reader: None,
        }
    }

    pub fn with_secret_reader(mut self, reader: SecretReader) -> Self {
        self.secret_reader = Some(reader);
        self
    }

    /// Ask for one field
    /// DOCUMENTATION: Returns the line without its line terminator, exactly
    /// as typed otherwise. Bytes that are not UTF-8 are replaced rather than
    /// failing the console. `None` means the input is exhausted.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&raw);
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }

    /// Ask for a field that must not be echoed (passwords)
    pub fn ask_secret(&mut self, label: &str) -> io::Result<Option<String>> {
        let Some(reader) = self.secret_reader else {
            return self.ask(label);
        };

        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        reader(&mut self.output)
    }

    /// Ask for several fields in order; `None` if input ends part-way
    pub fn ask_all<const N: usize>(&mut self, labels: [&str; N]) -> io::Result<Option<[String; N]>> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, label) in values.iter_mut().zip(labels) {
            match self.ask(label)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Read a line from the terminal with echo off
/// DOCUMENTATION: Raw mode is always left again, even on read errors.
/// Ctrl-C and Ctrl-D abandon the field.
pub fn read_masked(out: &mut dyn Write) -> io::Result<Option<String>> {
    terminal::enable_raw_mode()?;
    let result = read_masked_keys();
    terminal::disable_raw_mode()?;

    writeln!(out)?;
    result
}

fn read_masked_keys() -> io::Result<Option<String>> {
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match key.code {
            KeyCode::Enter => return Ok(Some(secret)),
            KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None)
            }
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}
