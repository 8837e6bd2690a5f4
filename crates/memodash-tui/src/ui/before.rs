//! The unoptimized dashboard.
//!
//! Kept deliberately naive for comparison:
//! - the root owns the records and passes them whole to children that do
//!   not read them, together with its unrelated local theme;
//! - every composition pass builds new callbacks;
//! - no child is memoized, and the activity feed is rebuilt on every render.
//!
//! Any change to root state therefore re-renders every child.

use std::cell::RefCell;
use std::rc::Rc;

use memodash_common::config::DashboardConfig;
use memodash_common::constants::ACTIVITY_FEED_LEN;
use memodash_common::error::Result;
use memodash_common::types::{StatsSummary, Theme, UserProfile, Variant};
use memodash_core::callback::Callback;
use memodash_core::feed;

use super::activity_feed::activity_feed_view;
use super::component::{Component, Mounted, RenderLog, RenderPolicy, Rendered};
use super::dashboard::{Composed, Dashboard, DashboardAction};
use super::stat_card::{StatCard, StatKind};
use super::user_list::user_list_view;

const ROOT: &str = "DashboardBefore";

const NOTES: &[&str] = &[
    "Props drilled through every level (user, stats, theme)",
    "All components re-render when \"Fake Toggle\" changes",
    "Inline function definitions defeat memoization",
    "Activity feed recomputed on every render",
    "No component memoization",
];

#[derive(Debug, Clone)]
struct BeforeState {
    user: UserProfile,
    stats: StatsSummary,
    fake_theme: Theme,
    refresh_count: u64,
}

/// Everything the root hands to its content panels, used or not.
#[derive(Debug, Clone, PartialEq)]
pub struct DrilledProps {
    /// Full user record.
    pub user: UserProfile,
    /// Full stats record.
    pub stats: StatsSummary,
    /// The root's local theme.
    pub theme: Theme,
    /// User update handler, rebuilt on every pass.
    pub on_user_update: Option<Callback<()>>,
}

/// Active users panel that receives the full drilled props.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrilledUserList;

impl Component for DrilledUserList {
    type Props = DrilledProps;

    fn name(&self) -> String {
        "UserList".into()
    }

    fn render(&mut self, _: &DrilledProps) -> Rendered {
        user_list_view(None)
    }
}

/// Activity panel that derives its feed inside every render.
#[derive(Debug)]
pub struct DrilledActivityFeed {
    len: usize,
    computations: u64,
}

impl DrilledActivityFeed {
    /// Creates a panel showing `len` entries.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            computations: 0,
        }
    }

    /// Times the feed has been derived.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }
}

impl Component for DrilledActivityFeed {
    type Props = DrilledProps;

    fn name(&self) -> String {
        "ActivityFeed".into()
    }

    fn render(&mut self, _: &DrilledProps) -> Rendered {
        self.computations += 1;
        activity_feed_view(&feed::activity_feed(self.len))
    }
}

/// Dashboard that owns its records and drills them down.
pub struct BeforeDashboard {
    state: Rc<RefCell<BeforeState>>,
    users_increment: u64,
    log: RenderLog,
    cards: [Mounted<StatCard>; 4],
    user_list: Mounted<DrilledUserList>,
    activity_feed: Mounted<DrilledActivityFeed>,
}

impl BeforeDashboard {
    /// Mounts the dashboard with the seed records from `config`.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        let log = RenderLog::new();
        Self {
            state: Rc::new(RefCell::new(BeforeState {
                user: config.user.clone(),
                stats: config.stats,
                fake_theme: Theme::Light,
                refresh_count: 0,
            })),
            users_increment: config.users_increment,
            cards: StatKind::ALL
                .map(|kind| Mounted::new(StatCard::new(kind), RenderPolicy::Always, &log)),
            user_list: Mounted::new(DrilledUserList, RenderPolicy::Always, &log),
            activity_feed: Mounted::new(
                DrilledActivityFeed::new(ACTIVITY_FEED_LEN),
                RenderPolicy::Always,
                &log,
            ),
            log,
        }
    }

    /// Current stats record.
    #[must_use]
    pub fn stats(&self) -> StatsSummary {
        self.state.borrow().stats
    }

    /// Current user record.
    #[must_use]
    pub fn user(&self) -> UserProfile {
        self.state.borrow().user.clone()
    }

    /// Stat card handlers from the last composition pass.
    #[must_use]
    pub fn card_handlers(&self) -> Vec<Callback<()>> {
        self.cards
            .iter()
            .filter_map(|card| card.props().map(|props| props.on_update.clone()))
            .collect()
    }
}

impl Dashboard for BeforeDashboard {
    fn variant(&self) -> Variant {
        Variant::Before
    }

    fn compose(&mut self) -> Result<Composed> {
        self.log.record(ROOT);
        let snapshot = self.state.borrow().clone();

        let handle_stats_update = {
            let state = Rc::clone(&self.state);
            let step = self.users_increment;
            Callback::new(move |()| {
                let mut state = state.borrow_mut();
                state.stats = state.stats.with_more_users(step);
                Ok(())
            })
        };
        let handle_user_update = {
            let state = Rc::clone(&self.state);
            Callback::new(move |()| {
                let mut state = state.borrow_mut();
                state.user = state.user.emphasized();
                Ok(())
            })
        };

        let cards: Vec<_> = self
            .cards
            .iter_mut()
            .map(|card| {
                // A fresh wrapper per card, as an inline arrow would be.
                let inner = handle_stats_update.clone();
                let on_update = Callback::new(move |()| inner.call(()));
                let props = card.component().kind().props(&snapshot.stats, on_update);
                card.update(props)
            })
            .collect();

        let user_list = self.user_list.update(DrilledProps {
            user: snapshot.user.clone(),
            stats: snapshot.stats,
            theme: snapshot.fake_theme,
            on_user_update: Some(handle_user_update),
        });
        let activity_feed = self.activity_feed.update(DrilledProps {
            user: snapshot.user,
            stats: snapshot.stats,
            theme: snapshot.fake_theme,
            on_user_update: None,
        });

        Ok(Composed {
            variant: Variant::Before,
            title: "Dashboard (Before)",
            subtitle: "Unoptimized: watch every counter climb",
            notes_title: "Performance issues in this version",
            notes: NOTES,
            refresh_count: snapshot.refresh_count,
            fake_theme: Some(snapshot.fake_theme),
            profile: None,
            cards,
            user_list,
            activity_feed,
        })
    }

    fn dispatch(&mut self, action: DashboardAction) -> Result<()> {
        tracing::debug!(variant = "before", %action, "dispatch");
        match action {
            DashboardAction::RefreshStats => {
                if let Some(on_update) = self.card_handlers().into_iter().next() {
                    on_update.call(())?;
                }
            }
            DashboardAction::UpdateUser => {
                let handler = self
                    .user_list
                    .props()
                    .and_then(|props| props.on_user_update.clone());
                if let Some(on_user_update) = handler {
                    on_user_update.call(())?;
                }
            }
            DashboardAction::FakeToggle => {
                let mut state = self.state.borrow_mut();
                state.fake_theme = state.fake_theme.toggled();
            }
            DashboardAction::RefreshAll => {
                self.state.borrow_mut().refresh_count += 1;
            }
        }
        Ok(())
    }

    fn render_log(&self) -> &RenderLog {
        &self.log
    }

    fn activity_computations(&self) -> u64 {
        self.activity_feed.component().computations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHILDREN: [&str; 6] = [
        "StatCard \"Total Users\"",
        "StatCard \"Revenue\"",
        "StatCard \"Orders\"",
        "StatCard \"Growth\"",
        "UserList",
        "ActivityFeed",
    ];

    fn mounted() -> BeforeDashboard {
        let mut dashboard = BeforeDashboard::new(&DashboardConfig::default());
        let _ = dashboard.compose().unwrap();
        dashboard
    }

    #[test]
    fn fake_toggle_rerenders_every_child() {
        let mut dashboard = mounted();
        dashboard.dispatch(DashboardAction::FakeToggle).unwrap();
        let composed = dashboard.compose().unwrap();

        assert_eq!(composed.fake_theme, Some(Theme::Dark));
        for name in CHILDREN {
            assert_eq!(dashboard.render_log().count(name), 2, "{name}");
        }
        assert_eq!(dashboard.render_log().count(ROOT), 2);
    }

    #[test]
    fn callbacks_are_rebuilt_every_pass() {
        let mut dashboard = mounted();
        let first = dashboard.card_handlers();
        let _ = dashboard.compose().unwrap();
        let second = dashboard.card_handlers();

        assert_eq!(first.len(), 4);
        assert!(first.iter().zip(&second).all(|(a, b)| a != b));
        assert_ne!(second[0], second[1]);
    }

    #[test]
    fn activity_feed_is_derived_on_every_render() {
        let mut dashboard = mounted();
        for _ in 0..3 {
            let _ = dashboard.compose().unwrap();
        }
        assert_eq!(dashboard.activity_computations(), 4);
    }

    #[test]
    fn refresh_stats_goes_through_card_handler() {
        let mut dashboard = mounted();
        dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
        assert_eq!(dashboard.stats().users, 1244);

        let composed = dashboard.compose().unwrap();
        assert!(composed.cards[0].plain_text().contains("1,244"));
    }

    #[test]
    fn update_user_goes_through_drilled_handler() {
        let mut dashboard = mounted();
        dashboard.dispatch(DashboardAction::UpdateUser).unwrap();
        assert_eq!(dashboard.user().name, "John Doe!");
    }

    #[test]
    fn actions_before_first_pass_are_ignored() {
        let mut dashboard = BeforeDashboard::new(&DashboardConfig::default());
        dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
        assert_eq!(dashboard.stats().users, 1234);
    }
}
