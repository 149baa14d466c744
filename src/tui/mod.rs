//! Terminal UI: click or key-driven play with a running score.

mod app;
pub mod input;
mod terminal;
pub mod ui;

pub use app::App;

use crate::config::GameConfig;
use crate::logging::{self, DEFAULT_TUI_LOG_FILE};
use crate::status::StatusText;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use input::Action;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;
use terminal::TerminalGuard;
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so output doesn't interfere with the TUI
    let log_path = config
        .log()
        .file()
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TUI_LOG_FILE));
    logging::init_file(config.log(), &log_path)?;

    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(StatusText::new(config.players().clone()));
    let res = run_app(&mut terminal, app);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Draw, wait for input, apply it. Repeats until quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut cells = ui::CellAreas::default();

    loop {
        terminal.draw(|frame| cells = ui::draw(frame, &app))?;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = input::action_for_key(key.code) {
                    app.handle(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match cells.hit(mouse.column, mouse.row) {
                    Some(position) => app.handle(Action::Place(position)),
                    None => {
                        debug!(column = mouse.column, row = mouse.row, "Click outside the board")
                    }
                }
            }
            _ => {}
        }
    }
}
