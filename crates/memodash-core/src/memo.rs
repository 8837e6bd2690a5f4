//! Derived-view cache.
//!
//! A [`MemoCell`] keeps the last `(inputs, result)` pair of a pure
//! computation and hands the same result back until the inputs change.
//! Results are returned as [`Shared`] handles, so a cached value keeps its
//! identity across calls and identity-based render gates see it as unchanged.

use crate::callback::Shared;

/// Memoization cell retaining the last computed value keyed by its inputs.
///
/// Inputs are usually a tuple; tuples compare element by element, which is
/// exactly the "any input changed" test a derived view needs. Use `()` for a
/// value that should be computed once for the lifetime of the cell.
#[derive(Debug)]
pub struct MemoCell<I, T> {
    slot: Option<(I, Shared<T>)>,
    computations: u64,
}

impl<I, T> MemoCell<I, T> {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }

    /// Returns the retained result, comparing inputs with `PartialEq`.
    ///
    /// `compute` runs only on the first call and whenever `inputs` differ
    /// from the retained inputs.
    pub fn compute_once<F>(&mut self, inputs: I, compute: F) -> Shared<T>
    where
        I: PartialEq,
        F: FnOnce() -> T,
    {
        self.compute_with(inputs, PartialEq::eq, compute)
    }

    /// Like [`compute_once`](Self::compute_once) with an explicit input
    /// comparison. `same(retained, next)` returning `true` reuses the
    /// retained result.
    pub fn compute_with<S, F>(&mut self, inputs: I, same: S, compute: F) -> Shared<T>
    where
        S: Fn(&I, &I) -> bool,
        F: FnOnce() -> T,
    {
        if let Some((retained, result)) = &self.slot {
            if same(retained, &inputs) {
                return result.clone();
            }
        }
        self.computations += 1;
        tracing::debug!(computations = self.computations, "memo cell recomputing");
        let result = Shared::new(compute());
        self.slot = Some((inputs, result.clone()));
        result
    }

    /// The retained result, if any, without computing.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.slot.as_ref().map(|(_, result)| &**result)
    }

    /// Number of times the computation has run.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }

    /// Forgets the retained pair so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

impl<I, T> Default for MemoCell<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_compute_once() {
        let mut cell = MemoCell::new();
        let mut runs = 0;

        let a = cell.compute_once((1_u32, "x"), || {
            runs += 1;
            vec![1, 2, 3]
        });
        let b = cell.compute_once((1_u32, "x"), || {
            runs += 1;
            vec![9]
        });

        assert_eq!(runs, 1);
        assert_eq!(cell.computations(), 1);
        assert_eq!(a, b);
        assert_eq!(*b, vec![1, 2, 3]);
    }

    #[test]
    fn changed_input_recomputes_and_replaces() {
        let mut cell = MemoCell::new();
        let first = cell.compute_once((1_u32, 2_u32), || 3_u32);
        let second = cell.compute_once((1_u32, 5_u32), || 6_u32);

        assert_eq!(cell.computations(), 2);
        assert_ne!(first, second);
        assert_eq!(cell.peek(), Some(&6));

        let third = cell.compute_once((1_u32, 5_u32), || 0_u32);
        assert_eq!(second, third);
        assert_eq!(cell.computations(), 2);
    }

    #[test]
    fn unit_inputs_compute_for_cell_lifetime() {
        let mut cell: MemoCell<(), String> = MemoCell::default();
        for _ in 0..10 {
            let _ = cell.compute_once((), || "feed".to_string());
        }
        assert_eq!(cell.computations(), 1);
    }

    #[test]
    fn custom_comparison_decides_reuse() {
        let mut cell = MemoCell::new();
        let same_parity = |a: &u32, b: &u32| a % 2 == b % 2;

        let _ = cell.compute_with(2, same_parity, || "even");
        let reused = cell.compute_with(4, same_parity, || "still even");
        assert_eq!(*reused, "even");

        let _ = cell.compute_with(3, same_parity, || "odd");
        assert_eq!(cell.computations(), 2);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let mut cell = MemoCell::new();
        let _ = cell.compute_once((), || 1);
        cell.invalidate();
        assert!(cell.peek().is_none());
        let _ = cell.compute_once((), || 2);
        assert_eq!(cell.peek(), Some(&2));
        assert_eq!(cell.computations(), 2);
    }
}
