use byline_types::{Post, User};
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// The full persisted state document.
///
/// Two named top-level sequences, `users` and `posts`, each an ordered list
/// of flat field records. The document is exactly the in-memory shape; there
/// is no version field and no envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

impl Snapshot {
    /// True when both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.posts.is_empty()
    }

    /// Encode as pretty-printed JSON (2-space indent), the persisted format.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a persisted document.
    pub fn from_json(raw: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
