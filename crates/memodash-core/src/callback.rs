//! Identity-compared handles for functions and derived data.
//!
//! Render gates compare plain records by value, but functions cannot be
//! compared by behaviour and cached data should not be compared element by
//! element. Both are wrapped here in `Rc`-backed handles whose equality is
//! "same allocation".

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use memodash_common::error::ScopeError;

/// Reference-counted value compared by identity.
///
/// Two `Shared` values are equal only if they point at the same allocation,
/// even when the pointed-to values would compare equal.
pub struct Shared<T: ?Sized>(Rc<T>);

impl<T> Shared<T> {
    /// Moves `value` into a new allocation.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    /// Wraps an existing `Rc` without reallocating.
    #[must_use]
    pub fn from_rc(rc: Rc<T>) -> Self {
        Self(rc)
    }

    /// Returns `true` if both handles point at the same allocation.
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&this.0), Rc::as_ptr(&other.0))
    }

    /// Address of the allocation, for logging.
    #[must_use]
    pub fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Eq for Shared<T> {}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&&*self.0).finish()
    }
}

type Handler<A> = dyn Fn(A) -> Result<(), ScopeError>;

/// A function handle passed to components as an input.
///
/// Equality is identity: a `Callback` built once and cloned stays equal to
/// itself forever, while two callbacks built from identical closures are
/// never equal. Memoized components rely on this to tell a stable handler
/// from one rebuilt on every composition pass.
pub struct Callback<A> {
    handler: Shared<Handler<A>>,
}

impl<A> Callback<A> {
    /// Wraps `handler` in a new identity.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(A) -> Result<(), ScopeError> + 'static,
    {
        let handler: Rc<Handler<A>> = Rc::new(handler);
        Self {
            handler: Shared::from_rc(handler),
        }
    }

    /// Invokes the handler.
    ///
    /// # Errors
    ///
    /// Propagates the handler's [`ScopeError`], typically because the store
    /// it writes to is no longer mounted.
    pub fn call(&self, arg: A) -> Result<(), ScopeError> {
        (*self.handler)(arg)
    }

    /// Returns `true` if both callbacks are the same handle.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        Shared::ptr_eq(&self.handler, &other.handler)
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<A> PartialEq for Callback<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl<A> Eq for Callback<A> {}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", self.handler.addr())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn clones_share_identity() {
        let cb = Callback::new(|(): ()| Ok(()));
        let copy = cb.clone();
        assert_eq!(cb, copy);
        assert!(cb.same_identity(&copy));
    }

    #[test]
    fn identical_closures_are_distinct() {
        let a = Callback::new(|(): ()| Ok(()));
        let b = Callback::new(|(): ()| Ok(()));
        assert_ne!(a, b);
    }

    #[test]
    fn call_runs_handler() {
        let hits = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&hits);
        let cb = Callback::new(move |n: u32| {
            counter.set(counter.get() + n);
            Ok(())
        });
        assert!(cb.call(2).is_ok());
        assert!(cb.call(3).is_ok());
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn call_propagates_scope_error() {
        let cb = Callback::new(|(): ()| Err(ScopeError::new("set_stats")));
        assert_eq!(cb.call(()), Err(ScopeError::new("set_stats")));
    }

    #[test]
    fn shared_compares_by_allocation() {
        let a = Shared::new(vec![1, 2, 3]);
        let b = Shared::new(vec![1, 2, 3]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(*a, *b);
    }
}
