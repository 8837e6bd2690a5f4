//! Drawing and component modules.

pub mod activity_feed;
pub mod after;
pub mod before;
pub mod component;
pub mod dashboard;
pub mod format;
pub mod profile;
pub mod sidebar;
pub mod stat_card;
pub mod theme;
pub mod user_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::{Block, Paragraph};

use self::theme::Palette;
use crate::app::App;

const SIDEBAR_WIDTH: u16 = 22;

/// Paints the whole screen from the app's last composition pass.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(Block::new().style(palette.base()), area);

    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);
    sidebar::render_sidebar(frame, sidebar, app.current_view, app.theme, palette);

    match app.composed() {
        Some(composed) => {
            dashboard::render_dashboard(frame, main, composed, app.dashboard().render_log(), palette);
        }
        None => frame.render_widget(Paragraph::new("Mounting…").style(palette.muted()), main),
    }
}
