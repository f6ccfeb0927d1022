// src/services/browser.rs
// DOCUMENTATION: External browser launcher
// PURPOSE: Open the GraphiQL console for the configured GraphQL endpoint

use crate::errors::ClientError;
use std::process::{Command, Stdio};

/// Platform command that opens `url` in the default browser
pub fn launcher_command(url: &str) -> Command {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        // Empty title argument so `start` does not treat the URL as one
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Open the GraphQL endpoint in an external browser
/// DOCUMENTATION: No HTTP call is made by the client itself. The launchers
/// hand the URL to the browser and exit, so they are waited on and reaped.
pub fn open_graphql_interface(url: &str) -> Result<(), ClientError> {
    log::debug!("Opening GraphQL interface at {}", url);

    run_launcher(launcher_command(url)).map_err(|e| {
        log::warn!("Failed to launch browser for {}: {}", url, e);
        e
    })
}

fn run_launcher(mut command: Command) -> Result<(), ClientError> {
    let status = command
        .spawn()
        .and_then(|mut child| child.wait())
        .map_err(|e| ClientError::Browser(e.to_string()))?;

    if !status.success() {
        return Err(ClientError::Browser(format!(
            "{} exited with {}",
            command.get_program().to_string_lossy(),
            status
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_passes_url_last() {
        let url = "https://example.com/graphql/";
        let command = launcher_command(url);
        let args: Vec<_> = command.get_args().collect();

        assert_eq!(args.last().and_then(|a| a.to_str()), Some(url));
    }

    #[cfg(unix)]
    #[test]
    fn test_launcher_exit_status_is_checked() {
        assert!(run_launcher(Command::new("true")).is_ok());

        let err = run_launcher(Command::new("false")).unwrap_err();
        assert!(matches!(err, ClientError::Browser(ref m) if m.contains("false")));
    }

    #[test]
    fn test_missing_launcher_is_browser_error() {
        let err = run_launcher(Command::new("definitely-not-a-browser-launcher")).unwrap_err();
        assert!(matches!(err, ClientError::Browser(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_linux_uses_xdg_open() {
        let command = launcher_command("https://example.com");
        assert_eq!(command.get_program(), "xdg-open");
    }
}
