//! CLI module for flash-chat.
//!
//! Flags are handled before the terminal enters TUI mode:
//!
//! ```ignore
//! let args = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(args.command, &config, &mut io::stdout()) {
//!     return result;
//! }
//! // continue to the TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand};
pub use version::{version_line, VERSION};

use std::io::Write;

use crate::app::App;
use crate::config::{AppConfig, ENV_LOG_DIR, ENV_LOG_LEVEL, ENV_MOUSE, ENV_THEME, ENV_TICK_MS};
use crate::error::ChatResult;

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "\
{version}
Terminal chat shell.

USAGE:
    flash-chat [OPTIONS]

OPTIONS:
    -h, --help              Print this help and exit
    -V, --version           Print the version and exit
        --snapshot          Print the initial view state as JSON and exit
        --theme <THEME>     Start with the light or dark theme

KEYS:
    F1..F7                  Profile, contacts, chats, channels, favorites, settings, help
    Up / Down               Previous / next chat
    Enter                   Send the draft
    Esc                     Close the emoji picker, then the chat
    Ctrl+E                  Toggle the emoji picker
    Alt+1..9, 0, -, =       Pick emoji 1 to 12 while the picker is open
    Ctrl+T                  Toggle the theme
    Ctrl+C, Ctrl+Q          Quit

ENVIRONMENT:
    {ENV_THEME}        light | dark
    {ENV_LOG_DIR}      Log directory
    {ENV_LOG_LEVEL}          Default log level when RUST_LOG is unset
    {ENV_TICK_MS}      Redraw tick in milliseconds
    {ENV_MOUSE}        0 disables mouse capture
",
        version = version_line(),
    )
}

/// Run a non-TUI command, writing its output to `out`.
///
/// Returns `None` for [`CliCommand::RunTui`].
pub fn run_cli_command<W: Write>(
    command: CliCommand,
    config: &AppConfig,
    out: &mut W,
) -> Option<ChatResult<()>> {
    let result: ChatResult<()> = match command {
        CliCommand::Version => writeln!(out, "{}", version_line()).map_err(Into::into),
        CliCommand::Help => write!(out, "{}", usage()).map_err(Into::into),
        CliCommand::Snapshot => write_snapshot(config, out),
        CliCommand::RunTui => return None,
    };
    Some(result)
}

fn write_snapshot<W: Write>(config: &AppConfig, out: &mut W) -> ChatResult<()> {
    let app = App::new(config);
    let json = app
        .snapshot()
        .to_json_pretty()
        .map_err(std::io::Error::from)?;
    writeln!(out, "{json}")?;
    Ok(())
}
