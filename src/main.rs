mod app;
mod clock;
mod config;
mod entity;
mod event;
mod games;
mod scoreboard;
mod scores;
mod ui;

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::{Cli, Config};
use event::{Event, EventHandler};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Logs go to a file only: stderr shares the terminal the game is drawn on.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err).context("failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Tick => {
                let now = Instant::now();
                app.on_tick(now.duration_since(last_tick));
                last_tick = now;
            }
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse()).context("invalid configuration")?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }
    info!("starting with {config:?}");

    let mut app = App::new(&config);
    let events = EventHandler::new(config.frame);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &events);
    let restored = restore_terminal(&mut terminal);
    info!("bye");
    finish(result, restored)
}

/// A game loop failure outranks a failed restore; the latter is still logged.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => {
            warn!("terminal not restored: {restore_err:#}");
            Err(err)
        }
        (result, restored) => result.and(restored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn loop_error_survives_failed_restore() {
        let err = finish(Err(anyhow!("draw failed")), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn restore_error_reported_after_clean_run() {
        let err = finish(Ok(()), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
