//! The optimized dashboard.
//!
//! Business records live in a [`StoreScope`] owned by the root. Each child
//! is a [`Connected`] slot that selects only the values it displays and
//! subscribes only to the record those values come from. Callbacks are
//! bound once, so a resolved slot whose values did not change is stopped by
//! its `WhenChanged` gate.

use std::cell::Cell;
use std::rc::Rc;

use memodash_common::config::DashboardConfig;
use memodash_common::constants::ACTIVITY_FEED_LEN;
use memodash_common::error::{Result, ScopeError};
use memodash_common::types::Variant;
use memodash_core::callback::Callback;
use memodash_core::store::{StoreHandle, StoreScope, Subscription, Topic};

use super::activity_feed::ActivityFeed;
use super::component::{Component, Mounted, RenderLog, RenderPolicy, Rendered};
use super::dashboard::{Composed, Dashboard, DashboardAction};
use super::profile::{ProfileCard, ProfileProps};
use super::stat_card::{StatCard, StatKind};
use super::user_list::{UserList, UserListProps};

const ROOT: &str = "DashboardAfter";

const NOTES: &[&str] = &[
    "Shared store instead of prop drilling",
    "Stable callbacks bound once per store",
    "Children memoized on their own props",
    "Activity feed derived once and cached",
    "Presentational theme kept out of the store",
];

type Selector<P> = Box<dyn Fn(&StoreHandle) -> std::result::Result<P, ScopeError>>;

/// A memoized child that reads its props from the store.
pub struct Connected<C: Component> {
    mounted: Mounted<C>,
    stale: Rc<Cell<bool>>,
    select: Selector<C::Props>,
    _subscription: Option<Subscription>,
}

impl<C: Component> Connected<C> {
    /// Mounts `component` behind a `WhenChanged` gate. With a `topic`, the
    /// slot is re-resolved after every write of that record; without one it
    /// is resolved once.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the store is gone.
    pub fn new<F>(
        component: C,
        store: &StoreHandle,
        topic: Option<Topic>,
        log: &RenderLog,
        select: F,
    ) -> std::result::Result<Self, ScopeError>
    where
        F: Fn(&StoreHandle) -> std::result::Result<C::Props, ScopeError> + 'static,
    {
        let stale = Rc::new(Cell::new(true));
        let subscription = match topic {
            Some(topic) => {
                let flag = Rc::clone(&stale);
                Some(store.subscribe(topic, move |_| flag.set(true))?)
            }
            None => None,
        };
        Ok(Self {
            mounted: Mounted::new(component, RenderPolicy::WhenChanged, log),
            stale,
            select: Box::new(select),
            _subscription: subscription,
        })
    }

    /// Returns the current view, re-selecting props only if the subscribed
    /// record changed since the last call.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the store is gone.
    pub fn resolve(&mut self, store: &StoreHandle) -> std::result::Result<Rc<Rendered>, ScopeError> {
        if let Some(output) = self.mounted.output() {
            if !self.stale.get() {
                return Ok(output);
            }
        }
        let props = (self.select)(store)?;
        self.stale.set(false);
        Ok(self.mounted.update(props))
    }

    /// The mounted component.
    pub const fn mounted(&self) -> &Mounted<C> {
        &self.mounted
    }
}

/// Dashboard backed by a store scope.
pub struct AfterDashboard {
    log: RenderLog,
    refresh_count: u64,
    refresh_stats: Callback<()>,
    on_rename: Callback<()>,
    cards: Vec<Connected<StatCard>>,
    user_list: Connected<UserList>,
    activity_feed: Connected<ActivityFeed>,
    profile: Connected<ProfileCard>,
    store: StoreHandle,
    scope: StoreScope,
}

impl AfterDashboard {
    /// Opens a store seeded from `config` and wires the children to it.
    ///
    /// # Errors
    ///
    /// Returns an error if a child cannot subscribe to the new store.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let scope = StoreScope::from_config(config);
        let store = scope.handle();
        let actions = store.update_functions()?;
        let log = RenderLog::new();

        let refresh_stats = {
            let store = store.clone();
            let update_stats = actions.update_stats.clone();
            let step = config.users_increment;
            Callback::new(move |()| {
                let current = *store.stats()?;
                update_stats.call(current.with_more_users(step))
            })
        };
        let on_rename = {
            let store = store.clone();
            let update_user = actions.update_user;
            Callback::new(move |()| update_user.call(store.user()?.emphasized()))
        };

        let cards = StatKind::ALL
            .into_iter()
            .map(|kind| {
                let on_update = refresh_stats.clone();
                Connected::new(
                    StatCard::new(kind),
                    &store,
                    Some(Topic::Stats),
                    &log,
                    move |store| Ok(kind.props(&*store.stats()?, on_update.clone())),
                )
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let user_list = Connected::new(UserList, &store, Some(Topic::Stats), &log, |store| {
            Ok(UserListProps {
                total_users: store.stats()?.users,
            })
        })?;
        let activity_feed = Connected::new(
            ActivityFeed::new(ACTIVITY_FEED_LEN),
            &store,
            None,
            &log,
            |_| Ok(()),
        )?;
        let profile = {
            let on_rename = on_rename.clone();
            Connected::new(ProfileCard, &store, Some(Topic::User), &log, move |store| {
                Ok(ProfileProps {
                    user: (*store.user()?).clone(),
                    on_rename: on_rename.clone(),
                })
            })?
        };

        tracing::info!(scope = %scope.id(), "after dashboard wired");
        Ok(Self {
            log,
            refresh_count: 0,
            refresh_stats,
            on_rename,
            cards,
            user_list,
            activity_feed,
            profile,
            store,
            scope,
        })
    }

    /// Handle to this dashboard's store.
    #[must_use]
    pub fn store(&self) -> StoreHandle {
        self.store.clone()
    }

    /// The stat cards' refresh handler, bound once.
    #[must_use]
    pub fn refresh_stats_handler(&self) -> Callback<()> {
        self.refresh_stats.clone()
    }

    /// Stat card handlers from the last composition pass.
    #[must_use]
    pub fn card_handlers(&self) -> Vec<Callback<()>> {
        self.cards
            .iter()
            .filter_map(|card| card.mounted().props().map(|props| props.on_update.clone()))
            .collect()
    }
}

impl Dashboard for AfterDashboard {
    fn variant(&self) -> Variant {
        Variant::After
    }

    fn compose(&mut self) -> Result<Composed> {
        self.log.record(ROOT);
        let store = &self.store;
        let profile = self.profile.resolve(store)?;
        let cards = self
            .cards
            .iter_mut()
            .map(|card| card.resolve(store))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let user_list = self.user_list.resolve(store)?;
        let activity_feed = self.activity_feed.resolve(store)?;

        Ok(Composed {
            variant: Variant::After,
            title: "Dashboard (After)",
            subtitle: "Optimized: only what changed re-renders",
            notes_title: "Optimizations applied",
            notes: NOTES,
            refresh_count: self.refresh_count,
            fake_theme: None,
            profile: Some(profile),
            cards,
            user_list,
            activity_feed,
        })
    }

    fn dispatch(&mut self, action: DashboardAction) -> Result<()> {
        tracing::debug!(variant = "after", scope = %self.scope.id(), %action, "dispatch");
        match action {
            DashboardAction::RefreshStats => {
                if let Some(on_update) = self.card_handlers().into_iter().next() {
                    on_update.call(())?;
                }
            }
            DashboardAction::UpdateUser => self.on_rename.call(())?,
            DashboardAction::FakeToggle => {}
            DashboardAction::RefreshAll => self.refresh_count += 1,
        }
        Ok(())
    }

    fn render_log(&self) -> &RenderLog {
        &self.log
    }

    fn activity_computations(&self) -> u64 {
        self.activity_feed.mounted().component().computations()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    const USERS_CARD: &str = "StatCard \"Total Users\"";
    const CHILDREN: [&str; 7] = [
        USERS_CARD,
        "StatCard \"Revenue\"",
        "StatCard \"Orders\"",
        "StatCard \"Growth\"",
        "UserList",
        "ActivityFeed",
        "ProfileCard",
    ];

    fn mounted() -> AfterDashboard {
        let mut dashboard = AfterDashboard::new(&DashboardConfig::default()).unwrap();
        let _ = dashboard.compose().unwrap();
        dashboard
    }

    #[test]
    fn first_pass_renders_every_child_once() {
        let dashboard = mounted();
        for name in CHILDREN {
            assert_eq!(dashboard.render_log().count(name), 1, "{name}");
        }
    }

    #[test]
    fn root_only_changes_rerender_no_child() {
        let mut dashboard = mounted();
        dashboard.dispatch(DashboardAction::RefreshAll).unwrap();
        dashboard.dispatch(DashboardAction::FakeToggle).unwrap();
        let composed = dashboard.compose().unwrap();

        assert_eq!(composed.refresh_count, 1);
        assert_eq!(composed.fake_theme, None);
        for name in CHILDREN {
            assert_eq!(dashboard.render_log().count(name), 1, "{name}");
        }
        assert_eq!(dashboard.render_log().count(ROOT), 2);
    }

    #[test]
    fn stats_refresh_rerenders_only_stats_readers_that_changed() {
        let mut dashboard = mounted();
        dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
        let composed = dashboard.compose().unwrap();

        let log = dashboard.render_log();
        assert_eq!(log.count(USERS_CARD), 2);
        assert_eq!(log.count("UserList"), 2);
        assert_eq!(log.count("StatCard \"Revenue\""), 1);
        assert_eq!(log.count("StatCard \"Orders\""), 1);
        assert_eq!(log.count("StatCard \"Growth\""), 1);
        assert_eq!(log.count("ActivityFeed"), 1);
        assert_eq!(log.count("ProfileCard"), 1);
        assert!(composed.cards[0].plain_text().contains("1,244"));
        assert!(composed.user_list.plain_text().contains("Total: 1,244"));
    }

    #[test]
    fn user_update_rerenders_only_profile() {
        let mut dashboard = mounted();
        dashboard.dispatch(DashboardAction::UpdateUser).unwrap();
        let composed = dashboard.compose().unwrap();

        assert_eq!(dashboard.render_log().count("ProfileCard"), 2);
        // Root twice, every child once, the profile card once more.
        assert_eq!(dashboard.render_log().total(), 10);
        assert!(composed.profile.unwrap().plain_text().contains("John Doe!"));
    }

    #[test]
    fn stats_update_leaves_profile_untouched() {
        let mut dashboard = mounted();
        let store = dashboard.store();
        let actions = store.update_functions().unwrap();
        let current = *store.stats().unwrap();
        actions
            .update_stats
            .call(memodash_common::types::StatsSummary {
                users: 1244,
                ..current
            })
            .unwrap();
        let _ = dashboard.compose().unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.users, 1244);
        assert_eq!(stats.revenue, 56_780.0);
        assert_eq!(stats.orders, 890);
        assert_eq!(stats.growth, 12.5);
        assert_eq!(dashboard.render_log().count("ProfileCard"), 1);
    }

    #[test]
    fn card_handlers_keep_their_identity() {
        let mut dashboard = mounted();
        let first = dashboard.card_handlers();
        dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
        let _ = dashboard.compose().unwrap();
        let second = dashboard.card_handlers();

        assert_eq!(first, second);
        assert!(first.iter().all(|h| h.same_identity(&dashboard.refresh_stats_handler())));
    }

    #[test]
    fn refresh_stats_presses_the_first_card_button() {
        let mut dashboard = AfterDashboard::new(&DashboardConfig::default()).unwrap();
        dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
        assert_eq!(dashboard.store().stats().unwrap().users, 1234);

        let _ = dashboard.compose().unwrap();
        dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
        assert_eq!(dashboard.store().stats().unwrap().users, 1244);
    }

    #[test]
    fn cards_read_their_numbers_from_the_store() {
        let mut dashboard = mounted();
        let composed = dashboard.compose().unwrap();
        assert!(composed.cards[0].plain_text().contains("1,234"));
        assert!(composed.cards[1].plain_text().contains("$56,780"));
        assert!(composed.cards[2].plain_text().contains("890"));
        assert!(composed.cards[3].plain_text().contains("12.5%"));
    }

    #[test]
    fn activity_feed_is_derived_once() {
        let mut dashboard = mounted();
        for _ in 0..3 {
            dashboard.dispatch(DashboardAction::RefreshStats).unwrap();
            let _ = dashboard.compose().unwrap();
        }
        assert_eq!(dashboard.activity_computations(), 1);
    }

    #[test]
    fn dropping_the_dashboard_closes_its_store() {
        let dashboard = mounted();
        let store = dashboard.store();
        drop(dashboard);
        assert!(!store.is_active());
        assert_eq!(store.stats().unwrap_err(), ScopeError::new("stats"));
    }
}
