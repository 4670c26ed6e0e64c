//! # Shared State Wrapper
//!
//! Wraps the [`Store`] in `Arc<Mutex<_>>` so UI frameworks with
//! multi-threaded runtimes can hand one instance to every event handler.
//!
//! ## Thread Safety
//! The domain itself is single-threaded in spirit: every operation runs
//! start to finish under the lock, so no interleaving between a read and
//! the mutation it feeds is possible. The mutex exists to satisfy the
//! runtime, not to arbitrate real contention.

use std::sync::{Arc, Mutex};

use crate::store::Store;

/// Thread-safe handle to the shared store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Creates state around an empty store.
    pub fn new() -> Self {
        StoreState {
            store: Arc::new(Mutex::new(Store::new())),
        }
    }

    /// Creates state around a pre-populated store.
    pub fn from_store(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_store(|store| store.cart_totals());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.add_to_cart(&book_id))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}
