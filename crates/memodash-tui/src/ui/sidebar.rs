//! Navigation sidebar.

use memodash_common::constants::APP_NAME;
use memodash_common::types::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::theme::Palette;
use crate::app::View;

const ENTRIES: [(View, &str); 2] = [(View::Before, "Before"), (View::After, "After")];

/// Lines of the sidebar for `current` and `theme`.
#[must_use]
pub fn sidebar_lines(current: View, theme: Theme, palette: Palette) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = ENTRIES
        .iter()
        .map(|&(view, label)| {
            if view == current {
                Line::from(Span::styled(format!("▶ {label}"), palette.accent()))
            } else {
                Line::from(format!("  {label}"))
            }
        })
        .collect();
    lines.push(Line::default());
    let icon = match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
    };
    lines.push(Line::from(format!("{icon} {theme} mode")));
    lines.push(Line::from(Span::styled(
        format!("[t] → {}", theme.toggled()),
        palette.muted(),
    )));
    lines
}

/// Renders the sidebar.
pub fn render_sidebar(frame: &mut Frame, area: Rect, current: View, theme: Theme, palette: Palette) {
    frame.render_widget(
        Paragraph::new(sidebar_lines(current, theme, palette))
            .style(palette.base())
            .block(Block::bordered().title(APP_NAME)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn marks_current_view_and_theme() {
        let palette = Palette::for_theme(Theme::Dark);
        let lines = text(&sidebar_lines(View::After, Theme::Dark, palette));
        assert_eq!(lines[0], "  Before");
        assert_eq!(lines[1], "▶ After");
        assert!(lines.iter().any(|l| l.contains("dark mode")));
        assert!(lines.iter().any(|l| l.contains("→ light")));
    }
}
