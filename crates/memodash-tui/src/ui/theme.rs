//! Light and dark palettes for the layout.

use memodash_common::types::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors used by the layout for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text.
    pub fg: Color,
    /// Background.
    pub bg: Color,
    /// Highlights and the active navigation entry.
    pub accent: Color,
    /// Secondary text.
    pub muted: Color,
}

impl Palette {
    /// Palette for `theme`.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::DarkGray,
            },
            Theme::Dark => Self {
                fg: Color::Gray,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::DarkGray,
            },
        }
    }

    /// Base style for a full-screen background.
    #[must_use]
    pub const fn base(self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// Style for emphasized text.
    #[must_use]
    pub const fn accent(self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for secondary text.
    #[must_use]
    pub const fn muted(self) -> Style {
        Style::new().fg(self.muted)
    }
}
