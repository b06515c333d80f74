use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a generated identifier token.
const TOKEN_LEN: usize = 8;

/// Generate a short opaque token: the first 8 hex characters of a random
/// UUIDv4. Carries 32 random bits; no uniqueness re-check is performed
/// against existing records.
fn generate_token() -> String {
    let mut token = uuid::Uuid::new_v4().simple().to_string();
    token.truncate(TOKEN_LEN);
    token
}

/// Identifier of a [`User`](crate::User) record.
///
/// Opaque, unique within the users collection, and immutable once assigned.
/// Serializes transparently as its string value so persisted records stay
/// flat.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(generate_token())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Identifier of a [`Post`](crate::Post) record.
///
/// Same scheme and guarantees as [`UserId`]; kept as a distinct type so a
/// post id can never be passed where an author reference is expected.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(generate_token())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({})", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<PostId> for String {
    fn from(id: PostId) -> Self {
        id.0
    }
}
