//! Command-line argument parsing.

use crate::error::{ChatError, ChatResult};
use crate::state::Theme;

/// What the process should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and the key map and exit
    Help,
    /// Print the initial view state as JSON and exit
    Snapshot,
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed arguments: the command plus settings that override the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--theme <light|dark>`
    pub theme: Option<Theme>,
}

/// Parse command-line arguments (program name first).
///
/// The first of `--version`, `--help` and `--snapshot` wins; unknown
/// arguments are ignored and fall through to the TUI.
///
/// ```
/// use flash_chat::cli::{parse_args, CliCommand};
/// use flash_chat::state::Theme;
///
/// let args = ["flash-chat", "--theme", "dark"].map(String::from);
/// let parsed = parse_args(args.into_iter()).unwrap();
/// assert_eq!(parsed.command, CliCommand::RunTui);
/// assert_eq!(parsed.theme, Some(Theme::Dark));
/// ```
pub fn parse_args<I>(args: I) -> ChatResult<CliArgs>
where
    I: Iterator<Item = String>,
{
    let mut command = None;
    let mut theme = None;

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        let flag = match arg.as_str() {
            "--version" | "-V" => Some(CliCommand::Version),
            "--help" | "-h" => Some(CliCommand::Help),
            "--snapshot" => Some(CliCommand::Snapshot),
            "--theme" => {
                let value = args.next().ok_or_else(|| ChatError::Config {
                    key: "--theme".to_string(),
                    message: "missing value, expected 'light' or 'dark'".to_string(),
                })?;
                theme = Some(parse_theme(&value)?);
                None
            }
            other => {
                if let Some(value) = other.strip_prefix("--theme=") {
                    theme = Some(parse_theme(value)?);
                }
                None
            }
        };
        if command.is_none() {
            command = flag;
        }
    }

    Ok(CliArgs {
        command: command.unwrap_or(CliCommand::RunTui),
        theme,
    })
}

fn parse_theme(value: &str) -> ChatResult<Theme> {
    value.parse::<Theme>().map_err(|_| ChatError::Config {
        key: "--theme".to_string(),
        message: format!("expected 'light' or 'dark', got '{value}'"),
    })
}
