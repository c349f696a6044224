// Integration tests for the non-TUI command line paths

use flash_chat::cli::{parse_args, run_cli_command, CliCommand, VERSION};
use flash_chat::config::AppConfig;

fn run(args: &[&str]) -> String {
    let argv = std::iter::once("flash-chat".to_string()).chain(args.iter().map(|s| s.to_string()));
    let parsed = parse_args(argv).unwrap();

    let mut config = AppConfig::default();
    if let Some(theme) = parsed.theme {
        config = config.with_theme(theme);
    }

    let mut out = Vec::new();
    run_cli_command(parsed.command, &config, &mut out)
        .expect("not a TUI command")
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_version_flag() {
    assert_eq!(run(&["--version"]).trim(), format!("flash-chat {VERSION}"));
}

#[test]
fn test_help_flag() {
    let text = run(&["-h"]);
    assert!(text.starts_with(&format!("flash-chat {VERSION}")));
    assert!(text.contains("--theme"));
    assert!(text.contains("F1..F7"));
}

#[test]
fn test_snapshot_reports_initial_state() {
    let value: serde_json::Value = serde_json::from_str(&run(&["--snapshot"])).unwrap();

    assert_eq!(value["theme"], "light");
    assert_eq!(value["section"], "chats");
    assert_eq!(value["selected_chat_id"], 1);
    assert_eq!(value["draft"], "");
    assert_eq!(value["emoji_picker_visible"], false);
    assert_eq!(value["unread_total"], 7);
    assert_eq!(value["current_chat"], "Алексей");
}

#[test]
fn test_snapshot_with_theme_override() {
    let value: serde_json::Value =
        serde_json::from_str(&run(&["--theme", "dark", "--snapshot"])).unwrap();
    assert_eq!(value["theme"], "dark");
}

#[test]
fn test_plain_run_is_tui() {
    let parsed = parse_args(["flash-chat".to_string()].into_iter()).unwrap();
    assert_eq!(parsed.command, CliCommand::RunTui);
}
