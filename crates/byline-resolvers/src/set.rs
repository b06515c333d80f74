//! The shared operation surface over a [`Store`].

use std::sync::{Mutex, MutexGuard};

use byline_store::Store;

/// Owns the store and serializes every operation against it.
///
/// One `ResolverSet` is created at process start and shared for the process
/// lifetime. Each operation, read or write, runs under a single lock
/// acquisition that also covers the persist step, so callers on other
/// threads never observe a half-applied mutation and two writes never
/// interleave their file rewrite. The lock is a plain [`std::sync::Mutex`]:
/// operations are synchronous end to end and never held across an await.
#[derive(Debug)]
pub struct ResolverSet {
    store: Mutex<Store>,
}

impl ResolverSet {
    /// Wrap an already-opened store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().expect("lock poisoned")
    }
}
