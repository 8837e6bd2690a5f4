//! Update functions bound to a store scope.

use memodash_common::types::{StatsSummary, UserProfile};

use crate::callback::Callback;
use crate::store::StoreHandle;

/// Write operations handed to consumers instead of the store itself.
///
/// Bound exactly once per [`StoreScope`](crate::store::StoreScope); every
/// [`StoreHandle::update_functions`] call returns clones of the same
/// handles, so memoized consumers never see a "new" callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFunctions {
    /// Replaces the user record.
    pub update_user: Callback<UserProfile>,
    /// Replaces the stats record.
    pub update_stats: Callback<StatsSummary>,
}

impl UpdateFunctions {
    pub(crate) fn bind(store: &StoreHandle) -> Self {
        let user_store = store.clone();
        let stats_store = store.clone();
        Self {
            update_user: Callback::new(move |next| user_store.set_user(next)),
            update_stats: Callback::new(move |next| stats_store.set_stats(next)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::store::StoreScope;

    use super::*;

    #[test]
    fn identity_survives_calls_with_equal_arguments() {
        let scope = StoreScope::seeded();
        let store = scope.handle();
        let before = store.update_functions().unwrap();

        let stats = *store.stats().unwrap();
        before.update_stats.call(stats).unwrap();
        before.update_stats.call(stats).unwrap();

        let after = store.update_functions().unwrap();
        assert!(before.update_stats.same_identity(&after.update_stats));
        assert_eq!(before, after);
    }

    #[test]
    fn separate_scopes_bind_separate_functions() {
        let a = StoreScope::seeded();
        let b = StoreScope::seeded();
        assert_ne!(
            a.handle().update_functions().unwrap(),
            b.handle().update_functions().unwrap()
        );
    }

    #[test]
    fn update_user_replaces_whole_record() {
        let scope = StoreScope::seeded();
        let store = scope.handle();
        let next = UserProfile::new("Ada", "Owner", "ada@example.com");

        store
            .update_functions()
            .unwrap()
            .update_user
            .call(next.clone())
            .unwrap();

        assert_eq!(*store.user().unwrap(), next);
    }
}
