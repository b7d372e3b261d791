mod app;
mod events;
mod tui;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::stdout;

use pickwheel::config::Config;
use pickwheel::log;
use pickwheel::settle::{self, SettleReceiver};

use app::App;
use events::EventHandler;

const USAGE: &str = "Usage: pickwheel [--min-date YYYY-MM-DD] [--max-date YYYY-MM-DD] [--no-cyclic]";

/// Values given on the command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    cyclic: Option<bool>,
    help: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--min-date" | "--max-date") => {
                let Some(raw) = args.get(i + 1) else {
                    eprintln!("Warning: {} requires a date argument", flag);
                    i += 1;
                    continue;
                };
                match raw.parse::<NaiveDate>() {
                    Ok(date) if flag == "--min-date" => cli.min_date = Some(date),
                    Ok(date) => cli.max_date = Some(date),
                    Err(e) => eprintln!("Warning: ignoring {} '{}': {}", flag, raw, e),
                }
                i += 2;
                continue;
            }
            "--no-cyclic" => cli.cyclic = Some(false),
            "--help" | "-h" => cli.help = true,
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    cli
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Precedence: CLI > env var > config file > default
    let config = Config::load().with_overrides(cli.min_date, cli.max_date, cli.cyclic);
    log::log(&format!("Config: {:?}", config));

    // Build the app before touching the terminal so errors print normally
    let (settle_tx, settle_rx) = settle::channel();
    let mut app = App::new(config, Local::now().naive_local(), settle_tx)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, settle_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut settle_rx: SettleReceiver,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.apply(action);
                    }
                    Some(Err(e)) => log::log(&format!("Terminal event error: {}", e)),
                    None => break,
                }
            }

            // Frames and finishes of in-flight settles
            Some(event) = settle_rx.recv() => {
                app.handle_settle(event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
