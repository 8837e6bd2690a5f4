//! End-to-end behaviour of a store scope as seen by its consumers.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

use std::cell::Cell;
use std::rc::Rc;

use memodash_common::error::ScopeError;
use memodash_common::types::{StatsSummary, UserProfile};
use memodash_core::memo::MemoCell;
use memodash_core::store::{StoreHandle, StoreScope, Topic};

#[test]
fn stats_update_leaves_user_consumers_untouched() {
    let scope = StoreScope::new(
        UserProfile::default(),
        StatsSummary {
            users: 1234,
            revenue: 56_780.0,
            orders: 890,
            growth: 12.5,
        },
    );
    let store = scope.handle();
    let user_notifications = Rc::new(Cell::new(0));
    let seen = Rc::clone(&user_notifications);
    let _user_sub = store
        .subscribe(Topic::User, move |_| seen.set(seen.get() + 1))
        .expect("scope is active");

    let actions = store.update_functions().expect("scope is active");
    let current = *store.stats().expect("scope is active");
    actions
        .update_stats
        .call(StatsSummary {
            users: 1244,
            ..current
        })
        .expect("scope is active");

    let stats = store.stats().unwrap();
    assert_eq!(stats.users, 1244);
    assert_eq!(stats.revenue, 56_780.0);
    assert_eq!(stats.orders, 890);
    assert_eq!(stats.growth, 12.5);
    assert_eq!(user_notifications.get(), 0);
}

#[test]
fn derived_value_follows_store_writes() {
    let scope = StoreScope::seeded();
    let store = scope.handle();
    let mut users_label = MemoCell::new();

    let mut label = |store: &StoreHandle| {
        let stats = store.stats().unwrap();
        users_label.compute_once((stats.users,), || format!("{} users", stats.users))
    };

    let first = label(&store);
    let again = label(&store);
    assert_eq!(first, again);

    store
        .set_stats(StatsSummary::default().with_more_users(6))
        .unwrap();
    let changed = label(&store);
    assert_ne!(first, changed);
    assert_eq!(*changed, "1240 users");
}

#[test]
fn consumer_outside_scope_gets_scope_error() {
    let orphan = StoreHandle::detached();
    let err = orphan.stats().unwrap_err();
    assert_eq!(err, ScopeError::new("stats"));
    assert!(err.to_string().contains("no active store"));
}

#[test]
fn remounting_starts_from_seed() {
    let first = StoreScope::seeded();
    first
        .handle()
        .set_user(UserProfile::default().emphasized())
        .unwrap();
    let first_id = first.id();
    drop(first);

    let second = StoreScope::seeded();
    assert_ne!(second.id(), first_id);
    assert_eq!(*second.handle().user().unwrap(), UserProfile::default());
}
