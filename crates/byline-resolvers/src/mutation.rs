//! Write operations. Every successful write rewrites the whole state
//! document through [`byline_store::Store::persist`] before returning;
//! domain failures return before anything is touched.

use byline_types::{Post, PostId, User, UserId};

use crate::error::{ResolverError, ResolverResult};
use crate::records::{NewPost, NewUser, PostPatch, UserPatch};
use crate::set::ResolverSet;

impl ResolverSet {
    /// Add a user under a freshly generated id.
    pub fn create_user(&self, new: NewUser) -> ResolverResult<User> {
        let mut store = self.lock();
        let user = User {
            id: UserId::generate(),
            name: new.name,
            email: new.email,
            age: new.age,
        };
        store.users_mut().push(user.clone());
        store.persist()?;
        tracing::debug!(id = %user.id, "user created");
        Ok(user)
    }

    /// Apply a partial update to a user.
    ///
    /// Raises [`ResolverError::UserNotFound`] when the id is unknown. String
    /// fields are ignored when absent or empty; `age` applies on presence,
    /// so an explicit null clears it and zero is stored as given.
    pub fn update_user(&self, id: &UserId, patch: UserPatch) -> ResolverResult<User> {
        let mut store = self.lock();
        let user = store
            .users_mut()
            .iter_mut()
            .find(|user| &user.id == id)
            .ok_or(ResolverError::UserNotFound)?;
        if let Some(name) = patch.name.filter(|name| !name.is_empty()) {
            user.name = name;
        }
        if let Some(email) = patch.email.filter(|email| !email.is_empty()) {
            user.email = email;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }
        let user = user.clone();
        store.persist()?;
        tracing::debug!(id = %user.id, "user updated");
        Ok(user)
    }

    /// Remove a user and every post they authored.
    ///
    /// Returns `false` without touching the store when the id is unknown.
    pub fn delete_user(&self, id: &UserId) -> ResolverResult<bool> {
        let mut store = self.lock();
        if !store.users().iter().any(|user| &user.id == id) {
            return Ok(false);
        }
        store.users_mut().retain(|user| &user.id != id);
        store.posts_mut().retain(|post| &post.author_id != id);
        store.persist()?;
        tracing::debug!(%id, "user deleted");
        Ok(true)
    }

    /// Add a post under a freshly generated id.
    ///
    /// The author reference is checked here and nowhere else; a dangling id
    /// raises [`ResolverError::AuthorNotFound`] with the store untouched.
    pub fn create_post(&self, new: NewPost) -> ResolverResult<Post> {
        let mut store = self.lock();
        if !store.users().iter().any(|user| user.id == new.author_id) {
            return Err(ResolverError::AuthorNotFound);
        }
        let post = Post {
            id: PostId::generate(),
            title: new.title,
            content: new.content,
            author_id: new.author_id,
        };
        store.posts_mut().push(post.clone());
        store.persist()?;
        tracing::debug!(id = %post.id, author = %post.author_id, "post created");
        Ok(post)
    }

    /// Apply a partial update to a post.
    ///
    /// Raises [`ResolverError::PostNotFound`] when the id is unknown. Absent
    /// and empty strings are both ignored; the author reference is not
    /// re-checked (it is not updatable).
    pub fn update_post(&self, id: &PostId, patch: PostPatch) -> ResolverResult<Post> {
        let mut store = self.lock();
        let post = store
            .posts_mut()
            .iter_mut()
            .find(|post| &post.id == id)
            .ok_or(ResolverError::PostNotFound)?;
        if let Some(title) = patch.title.filter(|title| !title.is_empty()) {
            post.title = title;
        }
        if let Some(content) = patch.content.filter(|content| !content.is_empty()) {
            post.content = content;
        }
        let post = post.clone();
        store.persist()?;
        tracing::debug!(id = %post.id, "post updated");
        Ok(post)
    }

    /// Remove a post.
    ///
    /// Returns `false` without touching the store when the id is unknown.
    pub fn delete_post(&self, id: &PostId) -> ResolverResult<bool> {
        let mut store = self.lock();
        if !store.posts().iter().any(|post| &post.id == id) {
            return Ok(false);
        }
        store.posts_mut().retain(|post| &post.id != id);
        store.persist()?;
        tracing::debug!(%id, "post deleted");
        Ok(true)
    }
}
