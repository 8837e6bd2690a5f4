//! Dashboard composition contract and main layout.
//!
//! Both variants implement [`Dashboard`]: a composition pass produces a
//! [`Composed`] set of views, and [`render_dashboard`] paints it. The
//! variants differ only in how they decide which children to re-render.

use std::fmt;
use std::rc::Rc;

use memodash_common::config::DashboardConfig;
use memodash_common::error::Result;
use memodash_common::types::{Theme, Variant};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::after::AfterDashboard;
use super::before::BeforeDashboard;
use super::component::{RenderLog, Rendered};
use super::theme::Palette;

/// Interactions a dashboard responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardAction {
    /// Press the refresh button of the first stat card.
    RefreshStats,
    /// Append `!` to the signed-in user's name.
    UpdateUser,
    /// Flip the before variant's unused local theme.
    FakeToggle,
    /// Bump the root's refresh counter.
    RefreshAll,
}

impl fmt::Display for DashboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RefreshStats => write!(f, "refresh-stats"),
            Self::UpdateUser => write!(f, "update-user"),
            Self::FakeToggle => write!(f, "fake-toggle"),
            Self::RefreshAll => write!(f, "refresh-all"),
        }
    }
}

/// Views produced by one composition pass.
#[derive(Debug, Clone)]
pub struct Composed {
    /// Variant that produced these views.
    pub variant: Variant,
    /// Heading.
    pub title: &'static str,
    /// Line under the heading.
    pub subtitle: &'static str,
    /// Heading of the notes panel.
    pub notes_title: &'static str,
    /// Bullet points of the notes panel.
    pub notes: &'static [&'static str],
    /// Root refresh counter.
    pub refresh_count: u64,
    /// The before variant's local theme, shown on its toggle button.
    pub fake_theme: Option<Theme>,
    /// Signed-in user card, if the variant has one.
    pub profile: Option<Rc<Rendered>>,
    /// Stat cards in grid order.
    pub cards: Vec<Rc<Rendered>>,
    /// Active users panel.
    pub user_list: Rc<Rendered>,
    /// Recent activity panel.
    pub activity_feed: Rc<Rendered>,
}

/// A mounted dashboard variant.
pub trait Dashboard {
    /// Which variant this is.
    fn variant(&self) -> Variant;

    /// Runs one composition pass.
    ///
    /// # Errors
    ///
    /// Returns an error if a child cannot resolve its inputs.
    fn compose(&mut self) -> Result<Composed>;

    /// Handles an interaction. Takes effect on the next composition pass.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler cannot reach its state.
    fn dispatch(&mut self, action: DashboardAction) -> Result<()>;

    /// Render counts of this dashboard's components.
    fn render_log(&self) -> &RenderLog;

    /// Times the activity feed has been derived.
    fn activity_computations(&self) -> u64;
}

/// Mounts a fresh dashboard of `variant`.
///
/// # Errors
///
/// Returns an error if the variant cannot wire its children.
pub fn mount(variant: Variant, config: &DashboardConfig) -> Result<Box<dyn Dashboard>> {
    tracing::info!(%variant, "mounting dashboard");
    Ok(match variant {
        Variant::Before => Box::new(BeforeDashboard::new(config)),
        Variant::After => Box::new(AfterDashboard::new(config)?),
    })
}

/// Renders the main dashboard area.
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    composed: &Composed,
    log: &RenderLog,
    palette: Palette,
) {
    let profile_height = if composed.profile.is_some() { 3 } else { 0 };
    let notes_height = u16::try_from(composed.notes.len()).unwrap_or(u16::MAX).saturating_add(2);
    let [header, notes, profile, cards, content, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(notes_height),
        Constraint::Length(profile_height),
        Constraint::Length(5),
        Constraint::Min(7),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header, composed, log, palette);
    render_notes(frame, notes, composed, palette);

    if let Some(view) = &composed.profile {
        frame.render_widget(view.as_ref(), profile);
    }

    let card_areas = Layout::horizontal(vec![Constraint::Fill(1); composed.cards.len()]).split(cards);
    for (view, area) in composed.cards.iter().zip(card_areas.iter()) {
        frame.render_widget(view.as_ref(), *area);
    }

    let [users, activity] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(content);
    frame.render_widget(composed.user_list.as_ref(), users);
    frame.render_widget(composed.activity_feed.as_ref(), activity);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "[Tab] switch  [t] theme  [f] fake toggle  [r] refresh all  [s] refresh stats  [u] rename  [c] clear counts  [q] quit",
            palette.muted(),
        ))),
        footer,
    );
}

fn render_header(frame: &mut Frame, area: Rect, composed: &Composed, log: &RenderLog, palette: Palette) {
    let mut controls = vec![Span::styled(
        format!("[r] Refresh All ({})", composed.refresh_count),
        palette.accent(),
    )];
    if let Some(theme) = composed.fake_theme {
        controls.push(Span::raw("  "));
        controls.push(Span::raw(format!("[f] Fake Toggle: {theme}")));
    }
    controls.push(Span::raw("  "));
    controls.push(Span::styled(format!("renders: {}", log.total()), palette.muted()));

    let lines = vec![
        Line::from(vec![
            Span::styled(composed.title, palette.accent()),
            Span::raw("  "),
            Span::styled(composed.subtitle, palette.muted()),
        ]),
        Line::from(controls),
    ];
    frame.render_widget(Paragraph::new(lines).block(Block::new()), area);
}

fn render_notes(frame: &mut Frame, area: Rect, composed: &Composed, palette: Palette) {
    let lines: Vec<Line<'_>> = composed
        .notes
        .iter()
        .map(|note| Line::from(format!("• {note}")))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .style(palette.base())
            .block(Block::bordered().title(composed.notes_title)),
        area,
    );
}
