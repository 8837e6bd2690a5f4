//! Terminal lifecycle and main event loop.

use memodash_common::config::DashboardConfig;
use ratatui::DefaultTerminal;

use crate::app::App;
use crate::error::Result;
use crate::event;
use crate::ui;

/// Runs the interactive dashboard until the user quits.
///
/// The terminal is restored even when the loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven or the dashboard fails.
pub fn run(config: DashboardConfig) -> Result<()> {
    let mut app = App::new(config)?;
    let mut terminal = ratatui::init();
    tracing::info!(view = ?app.current_view, "dashboard started");
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    tracing::info!("dashboard stopped");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while app.running {
        if app.needs_compose {
            let _ = app.compose()?;
        }
        if app.needs_redraw {
            let _ = terminal.draw(|frame| ui::draw(frame, app))?;
            app.needs_redraw = false;
        }
        app.handle_event(event::next_event(app.tick_rate())?)?;
    }
    Ok(())
}
