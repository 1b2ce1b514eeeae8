//! TUI application loop
//!
//! A single-threaded event loop: poll the session for request resolutions,
//! draw, then wait briefly for input. The only asynchronous work is the
//! suggestion request the session spawns; it reports back through the
//! session's pipeline channel, so the loop itself never blocks on it.

use crate::engine::SuggestionEngine;
use crate::input::map_key;
use crate::session::{Action, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Draw/poll cadence
const TICK: Duration = Duration::from_millis(50);

/// Application state for the TUI surface
pub struct App {
    pub session: Session,
    pub spinner_tick: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(engine: Arc<dyn SuggestionEngine>) -> Self {
        Self {
            session: Session::new(engine),
            spinner_tick: 0,
            should_quit: false,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal; nothing from this session survives teardown
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.session.poll(Instant::now());

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                match map_key(&key) {
                    Some(Action::Quit) => app.should_quit = true,
                    Some(action) => app.session.apply(action, Instant::now()),
                    None => {}
                }
            }
        }

        app.spinner_tick = app.spinner_tick.wrapping_add(1);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
