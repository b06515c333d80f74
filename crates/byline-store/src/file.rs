use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreResult;
use crate::snapshot::Snapshot;
use crate::traits::SnapshotBackend;

/// Whole-file JSON persistence.
///
/// `load` reads the entire file; `save` rewrites it from scratch (truncate
/// and write, not incremental). The file must exist and parse at load time —
/// `byline init` creates an empty one.
#[derive(Clone, Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend over the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for JsonFileBackend {
    fn load(&self) -> StoreResult<Snapshot> {
        let raw = fs::read_to_string(&self.path)?;
        let snapshot = Snapshot::from_json(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            users = snapshot.users.len(),
            posts = snapshot.posts.len(),
            "state document loaded"
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let raw = snapshot.to_json()?;
        fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), "state document rewritten");
        Ok(())
    }
}
