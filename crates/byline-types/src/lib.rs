//! Foundation types for byline.
//!
//! This crate provides the two record types served by the byline data layer
//! and their identifiers. Every other byline crate depends on `byline-types`.
//!
//! # Key Types
//!
//! - [`UserId`] / [`PostId`] — short opaque record identifiers
//! - [`User`] — an author record (name, email, optional age)
//! - [`Post`] — a post record referencing its author by [`UserId`]
//!
//! The serde layout of [`User`] and [`Post`] is the persisted on-disk layout:
//! flat field records, `authorId` in camelCase, `age` written as an explicit
//! `null` when unset.

pub mod ids;
pub mod post;
pub mod user;

pub use ids::{PostId, UserId};
pub use post::Post;
pub use user::User;
