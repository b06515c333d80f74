use std::sync::{Arc, RwLock};

use crate::error::StoreResult;
use crate::snapshot::Snapshot;
use crate::traits::SnapshotBackend;

/// In-memory backend for tests and embedding.
///
/// The "persisted" document lives in an `Arc<RwLock<Snapshot>>`, and clones
/// share it: a test can keep one handle, hand another to a
/// [`Store`](crate::Store), and afterwards inspect exactly what was saved.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
    state: Arc<RwLock<Snapshot>>,
}

impl InMemoryBackend {
    /// Create a backend holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// The currently "persisted" document.
    pub fn snapshot(&self) -> Snapshot {
        self.state.read().expect("lock poisoned").clone()
    }
}

impl SnapshotBackend for InMemoryBackend {
    fn load(&self) -> StoreResult<Snapshot> {
        Ok(self.snapshot())
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        *self.state.write().expect("lock poisoned") = snapshot.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use byline_types::{User, UserId};

    use super::*;

    #[test]
    fn new_backend_loads_empty() {
        let backend = InMemoryBackend::new();
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn save_replaces_document() {
        let backend = InMemoryBackend::new();
        let mut snapshot = Snapshot::default();
        snapshot.users.push(User {
            id: UserId::from("u1"),
            name: "Ann".into(),
            email: "a@x.com".into(),
            age: None,
        });

        backend.save(&snapshot).unwrap();
        assert_eq!(backend.load().unwrap(), snapshot);

        backend.save(&Snapshot::default()).unwrap();
        assert!(backend.load().unwrap().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let backend = InMemoryBackend::new();
        let observer = backend.clone();

        let mut snapshot = Snapshot::default();
        snapshot.users.push(User {
            id: UserId::from("u2"),
            name: "Bo".into(),
            email: "b@x.com".into(),
            age: Some(41),
        });
        backend.save(&snapshot).unwrap();

        assert_eq!(observer.snapshot(), snapshot);
    }

    #[test]
    fn with_snapshot_seeds_state() {
        let mut snapshot = Snapshot::default();
        snapshot.users.push(User {
            id: UserId::from("u3"),
            name: "Cy".into(),
            email: "c@x.com".into(),
            age: None,
        });
        let backend = InMemoryBackend::with_snapshot(snapshot.clone());
        assert_eq!(backend.load().unwrap(), snapshot);
    }
}
