use flash_chat::app::App;
use flash_chat::cli::{parse_args, run_cli_command, VERSION};
use flash_chat::config::AppConfig;
use flash_chat::error::ChatError;
use flash_chat::logging::init_logging;
use flash_chat::terminal::{setup_panic_hook, TerminalManager};
use flash_chat::ui;

use color_eyre::Result;
use futures::StreamExt;
use crossterm::event::EventStream;
use ratatui::Terminal;
use std::io;
use std::time::Duration;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args())?;
    let mut config = AppConfig::from_env()?;
    if let Some(theme) = args.theme {
        config = config.with_theme(theme);
    }

    // --version, --help and --snapshot never touch the terminal
    if let Some(result) = run_cli_command(args.command, &config, &mut io::stdout()) {
        return Ok(result?);
    }

    let log_file = init_logging(&config);
    tracing::info!(version = VERSION, log_file = ?log_file, theme = %config.theme, "starting flash-chat");

    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(config));

    match &result {
        Ok(()) => tracing::info!("flash-chat exited"),
        Err(err) => {
            let cause = ChatError::find_in(&**err);
            tracing::error!(
                code = cause.map_or("E_UNKNOWN", ChatError::error_code),
                recoverable = cause.is_some_and(ChatError::is_recoverable),
                error = %err,
                "flash-chat exited with error"
            );
        }
    }
    result
}

async fn run(config: AppConfig) -> Result<()> {
    let mut manager = TerminalManager::new(config.mouse)?;
    let mut app = App::new(&config);

    let size = manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_app(manager.terminal(), &mut app, config.tick_interval()).await;
    manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(tick) => app.tick(),

            event_result = event_stream.next() => match event_result {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(err)) => {
                    tracing::error!(error = %err, "terminal event stream failed");
                    return Err(err.into());
                }
                None => return Ok(()),
            },
        }
    }
}
