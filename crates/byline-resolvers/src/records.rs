//! Input and result records for the operation surface.
//!
//! Write inputs model the original wire contract's optionality directly:
//! every field a client may omit is an `Option`, and the patch records keep
//! the distinction between "field absent" and "field explicitly null" where
//! the contract depends on it.

use byline_types::{Post, User, UserId};

/// Fields for [`crate::ResolverSet::create_user`].
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Stored as `None` when omitted; a user may be created without an age.
    pub age: Option<i32>,
}

/// Partial update for [`crate::ResolverSet::update_user`].
///
/// String fields follow the non-empty rule: `None` and `Some("")` both leave
/// the current value in place. `age` is two-level: the outer `Option` is
/// whether the field appeared in the mutation document at all, the inner is
/// the nullable value — `Some(None)` clears a stored age, `None` keeps it.
#[derive(Clone, Debug, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<Option<i32>>,
}

/// Fields for [`crate::ResolverSet::create_post`].
#[derive(Clone, Debug)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    /// Must name an existing user at creation time.
    pub author_id: UserId,
}

/// Partial update for [`crate::ResolverSet::update_post`].
///
/// Same string rule as [`UserPatch`]; the author reference is not updatable.
#[derive(Clone, Debug, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// A user together with every post they authored, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserWithPosts {
    pub user: User,
    pub posts: Vec<Post>,
}

/// A post together with its author.
///
/// A dangling `author_id` yields `author: None` rather than an error; only
/// post creation checks the reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Option<User>,
}
