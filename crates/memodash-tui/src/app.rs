//! TUI application state machine.
//!
//! Maps keys to actions, owns the mounted dashboard, and tracks whether the
//! next frame needs a composition pass or only a repaint.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use memodash_common::config::DashboardConfig;
use memodash_common::error::Result;
use memodash_common::types::{Theme, Variant};

use crate::event::TerminalEvent;
use crate::report::RenderReport;
use crate::ui::dashboard::{self, Composed, Dashboard, DashboardAction};

/// Which dashboard the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Prop-drilled, unmemoized dashboard.
    Before,
    /// Store-backed, memoized dashboard.
    After,
}

impl View {
    /// The other view.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
        }
    }
}

impl From<Variant> for View {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Before => Self::Before,
            Variant::After => Self::After,
        }
    }
}

impl From<View> for Variant {
    fn from(view: View) -> Self {
        match view {
            View::Before => Self::Before,
            View::After => Self::After,
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Unmount the current dashboard and mount the other one.
    SwitchView,
    /// Flip the sidebar theme.
    ToggleTheme,
    /// Reset the current dashboard's render counts.
    ClearRenderLog,
    /// Forward an interaction to the dashboard.
    Dashboard(DashboardAction),
}

/// Root application state for the TUI.
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Current active view.
    pub current_view: View,
    /// Sidebar theme. Presentational only; never reaches the store.
    pub theme: Theme,
    /// The next frame needs a composition pass.
    pub needs_compose: bool,
    /// The next frame needs a repaint.
    pub needs_redraw: bool,
    config: DashboardConfig,
    dashboard: Box<dyn Dashboard>,
    composed: Option<Composed>,
}

impl App {
    /// Creates the application with the dashboard named in `config` mounted.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard cannot be mounted.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let dashboard = dashboard::mount(config.variant, &config)?;
        Ok(Self {
            running: true,
            current_view: config.variant.into(),
            theme: config.theme,
            needs_compose: true,
            needs_redraw: true,
            config,
            dashboard,
            composed: None,
        })
    }

    /// Signals the app to quit.
    pub const fn quit(&mut self) {
        self.running = false;
    }

    /// Maps a key press to an action. Releases and repeats are ignored.
    #[must_use]
    pub fn key_action(key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab => Some(Action::SwitchView),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('c') => Some(Action::ClearRenderLog),
            KeyCode::Char('f') => Some(Action::Dashboard(DashboardAction::FakeToggle)),
            KeyCode::Char('r') => Some(Action::Dashboard(DashboardAction::RefreshAll)),
            KeyCode::Char('s') => Some(Action::Dashboard(DashboardAction::RefreshStats)),
            KeyCode::Char('u') => Some(Action::Dashboard(DashboardAction::UpdateUser)),
            _ => None,
        }
    }

    /// Reacts to a terminal event. Keys go through [`apply`](Self::apply),
    /// a resize only repaints and an idle tick changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the action mapped from a key fails.
    pub fn handle_event(&mut self, event: TerminalEvent) -> Result<()> {
        match event {
            TerminalEvent::Key(key) => {
                if let Some(action) = Self::key_action(key) {
                    self.apply(action)?;
                }
            }
            TerminalEvent::Resize(..) => self.needs_redraw = true,
            TerminalEvent::Tick => {}
        }
        Ok(())
    }

    /// Applies `action` and marks what the next frame needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the dashboard rejects the action or a new
    /// dashboard cannot be mounted.
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.quit(),
            Action::SwitchView => self.switch_view()?,
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                tracing::debug!(theme = %self.theme, "sidebar theme toggled");
                // The layout re-renders; memoized children should not.
                self.needs_compose = true;
            }
            Action::ClearRenderLog => {
                self.dashboard.render_log().clear();
                self.needs_redraw = true;
            }
            Action::Dashboard(action) => {
                self.dashboard.dispatch(action)?;
                self.needs_compose = true;
            }
        }
        Ok(())
    }

    /// Unmounts the current dashboard, dropping its state, and mounts the
    /// other one from the seed records.
    ///
    /// # Errors
    ///
    /// Returns an error if the new dashboard cannot be mounted.
    pub fn switch_view(&mut self) -> Result<()> {
        let next = self.current_view.other();
        self.composed = None;
        self.dashboard = dashboard::mount(next.into(), &self.config)?;
        self.current_view = next;
        self.needs_compose = true;
        tracing::info!(view = ?next, "switched view");
        Ok(())
    }

    /// Runs a composition pass and keeps its views for drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if a child cannot resolve its inputs.
    pub fn compose(&mut self) -> Result<&Composed> {
        let composed = self.dashboard.compose()?;
        self.needs_compose = false;
        self.needs_redraw = true;
        Ok(&*self.composed.insert(composed))
    }

    /// Applies each action of `script` followed by a composition pass,
    /// composing first if nothing has been composed yet.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an action or a pass.
    pub fn run_script(&mut self, script: &[Action]) -> Result<()> {
        if self.composed.is_none() {
            let _ = self.compose()?;
        }
        for &action in script {
            self.apply(action)?;
            if self.needs_compose {
                let _ = self.compose()?;
            }
        }
        Ok(())
    }

    /// Views of the last composition pass.
    #[must_use]
    pub const fn composed(&self) -> Option<&Composed> {
        self.composed.as_ref()
    }

    /// The mounted dashboard.
    #[must_use]
    pub fn dashboard(&self) -> &dyn Dashboard {
        self.dashboard.as_ref()
    }

    /// How long to wait for input before an idle tick.
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.tick_rate_ms)
    }

    /// Captures the mounted dashboard's render counts.
    #[must_use]
    pub fn report(&self, steps: Vec<String>) -> RenderReport {
        RenderReport::capture(self.dashboard(), steps)
    }
}
