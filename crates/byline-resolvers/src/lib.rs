//! Operation layer for byline.
//!
//! Everything a client can do to the data set goes through a [`ResolverSet`]:
//! four reads returning augmented shapes and six writes that persist the
//! whole document before returning.
//!
//! # Key Types
//!
//! - [`ResolverSet`]: the operation surface; owns the store behind a mutex.
//! - [`UserWithPosts`] / [`PostWithAuthor`]: read results joining the two
//!   collections at lookup time.
//! - [`NewUser`] / [`UserPatch`] / [`NewPost`] / [`PostPatch`]: write inputs.
//! - [`ResolverError`]: the three domain failures plus persistence errors.
//!
//! # Design Rules
//!
//! - One lock acquisition per operation, covering the persist step, so a
//!   read never observes a half-applied write.
//! - Reads are infallible: a missing id yields `None`, a dangling author
//!   reference yields `author: None`.
//! - Deletes report a missing target with `false`; updates report it with an
//!   error. This asymmetry is part of the contract.
//! - Partial updates ignore absent and empty strings; `age` applies on field
//!   presence, so an explicit null clears it and zero is stored as given.
//! - Only post creation checks the author reference.

pub mod error;
mod mutation;
mod query;
pub mod records;
pub mod set;

pub use error::{ResolverError, ResolverResult};
pub use records::{NewPost, NewUser, PostPatch, PostWithAuthor, UserPatch, UserWithPosts};
pub use set::ResolverSet;
