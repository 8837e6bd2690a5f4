//! Scoped shared store for the dashboard records.
//!
//! A [`StoreScope`] owns one `UserProfile` and one `StatsSummary` for the
//! lifetime of a mounted dashboard. Descendants never receive the records
//! themselves through their parents; they receive a [`StoreHandle`] and read
//! what they need from it. Handles do not keep the store alive: once the
//! scope is dropped every handle fails with [`ScopeError`].
//!
//! Snapshots are handed out as `Rc`s and stay pointer-identical until the
//! next write of that record, so consumers can detect "no change" with
//! `Rc::ptr_eq` before comparing anything by value.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use memodash_common::config::DashboardConfig;
use memodash_common::error::ScopeError;
use memodash_common::types::{StatsSummary, UserProfile};

use crate::actions::UpdateFunctions;

/// Unique identifier of a store scope, used in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(uuid::Uuid);

impl ScopeId {
    fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Record a subscriber watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// The `UserProfile` record.
    User,
    /// The `StatsSummary` record.
    Stats,
}

/// Notification delivered to subscribers after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Record that was replaced.
    pub topic: Topic,
    /// Number of writes of that record so far, including this one.
    pub version: u64,
}

type Notify = dyn Fn(&Change);

struct Subscriber {
    id: u64,
    topic: Topic,
    notify: Rc<Notify>,
}

struct StoreInner {
    id: ScopeId,
    user: RefCell<Rc<UserProfile>>,
    stats: RefCell<Rc<StatsSummary>>,
    user_version: Cell<u64>,
    stats_version: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
    next_subscriber: Cell<u64>,
    actions: UpdateFunctions,
}

impl StoreInner {
    fn bump(&self, topic: Topic) -> u64 {
        let counter = match topic {
            Topic::User => &self.user_version,
            Topic::Stats => &self.stats_version,
        };
        let version = counter.get() + 1;
        counter.set(version);
        version
    }

    fn version(&self, topic: Topic) -> u64 {
        match topic {
            Topic::User => self.user_version.get(),
            Topic::Stats => self.stats_version.get(),
        }
    }

    /// Runs one notification cycle for `change`.
    ///
    /// The subscriber list is snapshotted first so callbacks may subscribe,
    /// unsubscribe or write back into the store.
    fn notify(&self, change: Change) {
        let targets: Vec<Rc<Notify>> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == change.topic)
            .map(|s| Rc::clone(&s.notify))
            .collect();
        tracing::debug!(
            scope = %self.id,
            topic = ?change.topic,
            version = change.version,
            subscribers = targets.len(),
            "store changed"
        );
        for notify in targets {
            notify(&change);
        }
    }
}

/// Owner of the dashboard records for one mounted dashboard.
///
/// Dropping the scope destroys the records, detaches every subscriber and
/// turns all outstanding handles into [`ScopeError`]s.
pub struct StoreScope {
    inner: Rc<StoreInner>,
}

impl StoreScope {
    /// Opens a scope holding the given records.
    #[must_use]
    pub fn new(user: UserProfile, stats: StatsSummary) -> Self {
        let id = ScopeId::generate();
        let inner = Rc::new_cyclic(|weak: &Weak<StoreInner>| StoreInner {
            id,
            user: RefCell::new(Rc::new(user)),
            stats: RefCell::new(Rc::new(stats)),
            user_version: Cell::new(0),
            stats_version: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
            next_subscriber: Cell::new(0),
            actions: UpdateFunctions::bind(&StoreHandle {
                inner: weak.clone(),
            }),
        });
        tracing::info!(scope = %id, "store scope opened");
        Self { inner }
    }

    /// Opens a scope holding the built-in seed records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(UserProfile::default(), StatsSummary::default())
    }

    /// Opens a scope holding the seed records from `config`.
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.user.clone(), config.stats)
    }

    /// Returns this scope's identifier.
    #[must_use]
    pub fn id(&self) -> ScopeId {
        self.inner.id
    }

    /// Returns a non-owning handle for descendants.
    #[must_use]
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Drop for StoreScope {
    fn drop(&mut self) {
        // Dropped outside the borrow: a subscriber's closure may own a
        // `Subscription` whose own drop touches the list.
        let detached = std::mem::take(&mut *self.inner.subscribers.borrow_mut());
        tracing::info!(
            scope = %self.inner.id,
            subscribers = detached.len(),
            "store scope closed"
        );
        drop(detached);
    }
}

impl fmt::Debug for StoreScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreScope")
            .field("id", &self.inner.id)
            .field("user_version", &self.inner.user_version.get())
            .field("stats_version", &self.inner.stats_version.get())
            .finish_non_exhaustive()
    }
}

/// Non-owning access to a [`StoreScope`].
///
/// Cheap to clone and meant to be passed down explicitly. Every operation
/// fails with [`ScopeError`] once the scope is gone.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Weak<StoreInner>,
}

impl StoreHandle {
    /// A handle with no store behind it, as seen by a consumer mounted
    /// outside any scope.
    #[must_use]
    pub const fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    fn scope(&self, operation: &'static str) -> Result<Rc<StoreInner>, ScopeError> {
        self.inner.upgrade().ok_or(ScopeError::new(operation))
    }

    /// Returns `true` while the owning scope is alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Current user snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone.
    pub fn user(&self) -> Result<Rc<UserProfile>, ScopeError> {
        let inner = self.scope("user")?;
        let user = Rc::clone(&inner.user.borrow());
        Ok(user)
    }

    /// Current stats snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone.
    pub fn stats(&self) -> Result<Rc<StatsSummary>, ScopeError> {
        let inner = self.scope("stats")?;
        let stats = Rc::clone(&inner.stats.borrow());
        Ok(stats)
    }

    /// Replaces the user record and notifies `Topic::User` subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone; nothing is written.
    pub fn set_user(&self, next: UserProfile) -> Result<(), ScopeError> {
        let inner = self.scope("set_user")?;
        *inner.user.borrow_mut() = Rc::new(next);
        let version = inner.bump(Topic::User);
        inner.notify(Change {
            topic: Topic::User,
            version,
        });
        Ok(())
    }

    /// Replaces the stats record and notifies `Topic::Stats` subscribers.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone; nothing is written.
    pub fn set_stats(&self, next: StatsSummary) -> Result<(), ScopeError> {
        let inner = self.scope("set_stats")?;
        *inner.stats.borrow_mut() = Rc::new(next);
        let version = inner.bump(Topic::Stats);
        inner.notify(Change {
            topic: Topic::Stats,
            version,
        });
        Ok(())
    }

    /// Number of writes of `topic`'s record since the scope opened.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone.
    pub fn version(&self, topic: Topic) -> Result<u64, ScopeError> {
        Ok(self.scope("version")?.version(topic))
    }

    /// The scope's update functions. Every call returns the same handles.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone.
    pub fn update_functions(&self) -> Result<UpdateFunctions, ScopeError> {
        Ok(self.scope("update_functions")?.actions.clone())
    }

    /// Calls `notify` after every write of `topic`'s record until the
    /// returned [`Subscription`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError`] if the scope is gone.
    pub fn subscribe<F>(&self, topic: Topic, notify: F) -> Result<Subscription, ScopeError>
    where
        F: Fn(&Change) + 'static,
    {
        let inner = self.scope("subscribe")?;
        let id = inner.next_subscriber.get();
        inner.next_subscriber.set(id + 1);
        inner.subscribers.borrow_mut().push(Subscriber {
            id,
            topic,
            notify: Rc::new(notify),
        });
        tracing::debug!(scope = %inner.id, subscriber = id, ?topic, "subscribed");
        Ok(Subscription {
            id,
            topic,
            store: Weak::clone(&self.inner),
        })
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::detached()
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Registration of a store subscriber; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    topic: Topic,
    store: Weak<StoreInner>,
}

impl Subscription {
    /// Record this subscription watches.
    pub const fn topic(&self) -> Topic {
        self.topic
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.borrow_mut().retain(|s| s.id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .finish()
    }
}
