use std::fmt;

use byline_types::{Post, User};

use crate::error::StoreResult;
use crate::snapshot::Snapshot;
use crate::traits::SnapshotBackend;

/// The live collections plus their persistence boundary.
///
/// A `Store` is opened once at process start and held for the process
/// lifetime. It does no locking and no domain validation of its own: callers
/// serialize access around each full operation, and the operation logic
/// lives in `byline-resolvers`. [`Store::persist`] is the only way state
/// reaches the backend, and mutating operations call it before returning.
pub struct Store {
    state: Snapshot,
    backend: Box<dyn SnapshotBackend>,
}

impl Store {
    /// Load the persisted state through `backend`.
    ///
    /// Failure here is a startup precondition violation (absent or malformed
    /// document) and is propagated for the caller to treat as fatal.
    pub fn open(backend: impl SnapshotBackend + 'static) -> StoreResult<Self> {
        let state = backend.load()?;
        Ok(Self {
            state,
            backend: Box::new(backend),
        })
    }

    /// The users collection, in insertion order.
    pub fn users(&self) -> &[User] {
        &self.state.users
    }

    /// The posts collection, in insertion order.
    pub fn posts(&self) -> &[Post] {
        &self.state.posts
    }

    /// Mutable access to the users collection.
    pub fn users_mut(&mut self) -> &mut Vec<User> {
        &mut self.state.users
    }

    /// Mutable access to the posts collection.
    pub fn posts_mut(&mut self) -> &mut Vec<Post> {
        &mut self.state.posts
    }

    /// A copy of the full in-memory state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.clone()
    }

    /// Serialize the complete in-memory state and overwrite the backing
    /// document. Invoked after every successful mutation, never after reads.
    pub fn persist(&self) -> StoreResult<()> {
        self.backend.save(&self.state)
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("users", &self.state.users.len())
            .field("posts", &self.state.posts.len())
            .finish()
    }
}
