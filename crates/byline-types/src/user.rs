use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// An author record.
///
/// `name` and `email` are required and non-empty at creation. `age` is
/// nullable: it serializes as an explicit `null` when unset, and a record
/// missing the field entirely deserializes as unset rather than failing the
/// load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}
