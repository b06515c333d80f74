//! Error types for the operation layer.

use byline_store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`crate::ResolverSet`] operations.
///
/// The three domain variants carry the exact messages the API promises to
/// clients; they reach the transport's error array unchanged, so their
/// wording is part of the contract.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// An update named a user id that is not in the store.
    #[error("User not found")]
    UserNotFound,

    /// An update named a post id that is not in the store.
    #[error("Post not found")]
    PostNotFound,

    /// A new post referenced an author id that is not in the store.
    #[error("Author not found")]
    AuthorNotFound,

    /// The state document could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias for resolver results.
pub type ResolverResult<T> = Result<T, ResolverError>;
