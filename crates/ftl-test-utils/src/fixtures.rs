//! Instrumented element types.
//!
//! - [`DropCounter`]: bumps a shared counter every time a value is dropped.
//! - [`PanicOnClone`]: clones succeed until a shared budget runs out, then
//!   panic. It also tallies drops across the element and its clones.
//!
//! Both share their counters through `Arc<AtomicUsize>` so tests can hold
//! on to the counter after handing elements to a container.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Element that records its own drops.
///
/// Clones share the counter, so after a container is dropped the counter
/// equals the number of live elements it owned plus any temporaries.
#[derive(Debug)]
pub struct DropCounter {
    pub value: i32,
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new(value: i32, drops: &Arc<AtomicUsize>) -> Self {
        Self {
            value,
            drops: Arc::clone(drops),
        }
    }

    /// A fresh counter starting at zero.
    pub fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    /// Drops recorded so far on `counter`.
    pub fn drops(counter: &Arc<AtomicUsize>) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        Self::new(self.value, &self.drops)
    }
}

impl Default for DropCounter {
    fn default() -> Self {
        Self::new(0, &Self::counter())
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Element whose clones draw from a shared budget and panic when it is
/// exhausted.
#[derive(Debug)]
pub struct PanicOnClone {
    pub value: i32,
    budget: Arc<AtomicUsize>,
    drops: Arc<AtomicUsize>,
}

impl PanicOnClone {
    /// An element whose clones (and their clones) may succeed `clones`
    /// more times in total.
    pub fn new(value: i32, clones: usize) -> Self {
        Self {
            value,
            budget: Arc::new(AtomicUsize::new(clones)),
            drops: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Drops recorded so far by this element's family of clones.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::SeqCst)
    }

    /// Remaining successful clones.
    pub fn remaining(&self) -> usize {
        self.budget.load(Ordering::SeqCst)
    }

    /// Reset the shared budget.
    pub fn set_remaining(&self, clones: usize) {
        self.budget.store(clones, Ordering::SeqCst);
    }
}

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        let left = self.budget.load(Ordering::SeqCst);
        if left == 0 {
            panic!("PanicOnClone: clone budget exhausted");
        }
        self.budget.store(left - 1, Ordering::SeqCst);
        Self {
            value: self.value,
            budget: Arc::clone(&self.budget),
            drops: Arc::clone(&self.drops),
        }
    }
}

impl Drop for PanicOnClone {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for PanicOnClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn drop_counter_counts_clones_too() {
        let drops = DropCounter::counter();
        {
            let a = DropCounter::new(1, &drops);
            let _b = a.clone();
        }
        assert_eq!(DropCounter::drops(&drops), 2);
    }

    #[test]
    fn panic_on_clone_spends_budget() {
        let seed = PanicOnClone::new(7, 2);
        let first = seed.clone();
        let _second = first.clone();
        assert_eq!(seed.remaining(), 0);
        let result = catch_unwind(AssertUnwindSafe(|| seed.clone()));
        assert!(result.is_err());
        seed.set_remaining(1);
        assert_eq!(seed.clone().value, 7);
    }

    #[test]
    fn panic_on_clone_tallies_family_drops() {
        let seed = PanicOnClone::new(1, 3);
        drop(seed.clone());
        drop(seed.clone());
        assert_eq!(seed.drops(), 2);
    }
}
