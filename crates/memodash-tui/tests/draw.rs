//! Drawing the full screen into an in-memory terminal.

#![allow(clippy::unwrap_used)]

use memodash_common::config::DashboardConfig;
use memodash_common::constants::APP_NAME;
use memodash_common::types::Variant;
use memodash_tui::app::{Action, App};
use memodash_tui::ui;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

fn screen(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn drawn(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
    let _ = terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    screen(terminal.backend().buffer())
}

#[test]
fn after_dashboard_shows_store_values() {
    let mut app = App::new(DashboardConfig::default()).unwrap();
    let _ = app.compose().unwrap();
    let text = drawn(&app);

    assert!(text.contains("Dashboard (After)"));
    assert!(text.contains("Total Users"));
    assert!(text.contains("1,234"));
    assert!(text.contains("John Doe"));
    assert!(text.contains("Recent Activity"));
    assert!(text.contains("▶ After"));
}

#[test]
fn before_dashboard_shows_fake_toggle() {
    let mut app = App::new(DashboardConfig {
        variant: Variant::Before,
        ..DashboardConfig::default()
    })
    .unwrap();
    app.run_script(&[Action::Dashboard(
        memodash_tui::ui::dashboard::DashboardAction::FakeToggle,
    )])
    .unwrap();
    let text = drawn(&app);

    assert!(text.contains("Dashboard (Before)"));
    assert!(text.contains("Fake Toggle: dark"));
    assert!(text.contains("▶ Before"));
}

#[test]
fn nothing_composed_yet_still_draws() {
    let app = App::new(DashboardConfig::default()).unwrap();
    let text = drawn(&app);
    assert!(text.contains(APP_NAME));
}
