use crate::error::StoreResult;
use crate::snapshot::Snapshot;

/// Narrow interface to the backing state storage.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the complete document or fails. An absent or malformed
///   document is an error; there is no partial read and no recovery path.
/// - `save` replaces the full document. Last write wins; backends never
///   merge.
/// - Calls are not internally ordered; the caller serializes access around
///   each full operation.
pub trait SnapshotBackend: Send + Sync {
    /// Read the complete persisted document.
    fn load(&self) -> StoreResult<Snapshot>;

    /// Overwrite the persisted document with `snapshot`.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;
}
