//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{ErrorDialog, FormView, StatusBar};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::constants::SUCCESS_NOTE_COMPOSED;

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state; the form tree is complete after this,
    // so run the one-shot picker binding before the first draw
    let mut app = App::new(config);
    app.on_ready();

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res?;

    // Hand the composed payload to whatever submission mechanism follows.
    // stdout carries only the machine-readable expiration value.
    if let Some(submission) = app.submission.take() {
        eprintln!("{SUCCESS_NOTE_COMPOSED}");
        println!("{}", submission.expiration_text());
    }

    Ok(())
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.ui.tick_interval_ms);

    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Check for terminal events without blocking first
        if event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key) => {
                    handle_events(Event::Key(key), app)?;
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        } else {
            tokio::time::sleep(tick).await;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Render the full UI frame
fn render_ui(f: &mut Frame, app: &App) {
    let areas = LayoutManager::main_layout(f.area());

    FormView::render(f, app, areas[0]);
    StatusBar::render(f, areas[1], app);
    ErrorDialog::render(f, app);
}
