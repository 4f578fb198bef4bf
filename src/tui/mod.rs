//! Terminal UI for Strictly Crosses.

mod app;
mod input;
mod ui;
mod views;

pub use app::App;
pub use input::{digit_position, move_cursor};
pub use ui::{Hit, ScreenLayout, draw, hit_test, screen_layout, status_text};
pub use views::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, CellView, RowView, cell_rect};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::GameConfig;

/// Runs the game until the user quits.
///
/// The terminal is restored before any loop error is returned.
#[instrument(skip_all, fields(rules = ?config.rules()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting Strictly Crosses TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::from_config(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, apply it. Each event is fully applied before the next draw.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            draw(f, &app);
        })?;

        if app.should_quit() {
            info!(rounds = app.session().round(), "Leaving game loop");
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }
}
