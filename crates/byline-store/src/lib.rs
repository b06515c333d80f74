//! State store for byline.
//!
//! This crate owns the two record collections (users and posts) and the sole
//! persistence boundary around them. The persisted representation is a single
//! JSON document with two top-level arrays — the literal in-memory shape,
//! with no version field.
//!
//! # Components
//!
//! - [`Snapshot`] — the full state document
//! - [`SnapshotBackend`] — the narrow interface to the backing storage
//! - [`JsonFileBackend`] — whole-file JSON read/overwrite on disk
//! - [`InMemoryBackend`] — shared in-memory state for tests and embedding
//! - [`Store`] — the live collections plus their backend
//!
//! # Design Rules
//!
//! 1. The store is loaded once, at startup. An absent or malformed document
//!    is a fatal startup error, not a runtime condition — there is no
//!    recovery path.
//! 2. Every successful mutation rewrites the complete document before the
//!    operation returns. Persistence is synchronous and never incremental.
//! 3. Reads never persist.
//! 4. The store itself does no locking; callers serialize access around each
//!    full operation (see `byline-resolvers`).
//! 5. Durability is last-write-wins. Concurrent external modification of the
//!    backing file is not defended against.

pub mod error;
pub mod file;
pub mod memory;
pub mod snapshot;
pub mod store;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::JsonFileBackend;
pub use memory::InMemoryBackend;
pub use snapshot::Snapshot;
pub use store::Store;
pub use traits::SnapshotBackend;
