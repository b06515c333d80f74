//! The GraphQL schema: output shapes, query root, and mutation root.
//!
//! Field and argument names are the wire contract the browser client was
//! written against (`users`, `createUser(name:, email:, age:)`, ...), so they
//! stay camelCase on the wire. Output types are deliberately non-recursive:
//! a user's posts are flat [`PostRecord`]s and a post's author is a flat
//! [`UserRecord`], each join performed once under the resolver lock rather
//! than field by field. Domain errors surface as plain GraphQL error
//! messages with no extensions.

use std::sync::Arc;

use async_graphql::{
    EmptySubscription, MaybeUndefined, Object, Result, Schema, SimpleObject, ID,
};
use byline_resolvers::{
    NewPost, NewUser, PostPatch, PostWithAuthor, ResolverSet, UserPatch, UserWithPosts,
};
use byline_types::{Post, PostId, User, UserId};

/// The executable schema over a shared [`ResolverSet`].
pub type BylineSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema. Both roots share the one resolver set.
pub fn build_schema(resolvers: Arc<ResolverSet>) -> BylineSchema {
    Schema::build(
        QueryRoot {
            resolvers: resolvers.clone(),
        },
        MutationRoot { resolvers },
        EmptySubscription,
    )
    .finish()
}

/// A user record as stored, without the posts join.
#[derive(Debug, SimpleObject)]
pub struct UserRecord {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// A post record as stored, without the author join.
#[derive(Debug, SimpleObject)]
pub struct PostRecord {
    pub id: ID,
    pub title: String,
    pub content: String,
}

/// A user with every post they authored.
#[derive(Debug, SimpleObject)]
#[graphql(name = "User")]
pub struct UserNode {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub posts: Vec<PostRecord>,
}

/// A post with its author. `author` is null when the reference dangles.
#[derive(Debug, SimpleObject)]
#[graphql(name = "Post")]
pub struct PostNode {
    pub id: ID,
    pub title: String,
    pub content: String,
    pub author: Option<UserRecord>,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: String::from(user.id).into(),
            name: user.name,
            email: user.email,
            age: user.age,
        }
    }
}

impl From<Post> for PostRecord {
    fn from(post: Post) -> Self {
        Self {
            id: String::from(post.id).into(),
            title: post.title,
            content: post.content,
        }
    }
}

impl From<UserWithPosts> for UserNode {
    fn from(found: UserWithPosts) -> Self {
        Self {
            id: String::from(found.user.id).into(),
            name: found.user.name,
            email: found.user.email,
            age: found.user.age,
            posts: found.posts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PostWithAuthor> for PostNode {
    fn from(found: PostWithAuthor) -> Self {
        Self {
            id: String::from(found.post.id).into(),
            title: found.post.title,
            content: found.post.content,
            author: found.author.map(Into::into),
        }
    }
}

/// Query root: the four read operations.
pub struct QueryRoot {
    resolvers: Arc<ResolverSet>,
}

#[Object]
impl QueryRoot {
    /// Every user, each with the posts they authored.
    async fn users(&self) -> Vec<UserNode> {
        self.resolvers
            .list_users()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// One user by id, or null when the id is unknown.
    async fn user(&self, id: ID) -> Option<UserNode> {
        self.resolvers.get_user(&UserId::from(id.0)).map(Into::into)
    }

    /// Every post, each with its author.
    async fn posts(&self) -> Vec<PostNode> {
        self.resolvers
            .list_posts()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// One post by id, or null when the id is unknown.
    async fn post(&self, id: ID) -> Option<PostNode> {
        self.resolvers.get_post(&PostId::from(id.0)).map(Into::into)
    }
}

/// Mutation root: the six write operations.
pub struct MutationRoot {
    resolvers: Arc<ResolverSet>,
}

#[Object]
impl MutationRoot {
    /// Create a user. `age` may be omitted or null.
    async fn create_user(
        &self,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> Result<UserRecord> {
        let user = self.resolvers.create_user(NewUser { name, email, age })?;
        Ok(user.into())
    }

    /// Update a user's fields. Omitted and empty string fields are left
    /// unchanged; an explicit `age: null` clears the age.
    async fn update_user(
        &self,
        id: ID,
        name: Option<String>,
        email: Option<String>,
        age: MaybeUndefined<i32>,
    ) -> Result<UserRecord> {
        let patch = UserPatch {
            name,
            email,
            age: match age {
                MaybeUndefined::Undefined => None,
                MaybeUndefined::Null => Some(None),
                MaybeUndefined::Value(n) => Some(Some(n)),
            },
        };
        let user = self.resolvers.update_user(&UserId::from(id.0), patch)?;
        Ok(user.into())
    }

    /// Delete a user and every post they authored. False when the id is
    /// unknown.
    async fn delete_user(&self, id: ID) -> Result<bool> {
        Ok(self.resolvers.delete_user(&UserId::from(id.0))?)
    }

    /// Create a post authored by an existing user.
    async fn create_post(
        &self,
        title: String,
        content: String,
        author_id: ID,
    ) -> Result<PostRecord> {
        let post = self.resolvers.create_post(NewPost {
            title,
            content,
            author_id: UserId::from(author_id.0),
        })?;
        Ok(post.into())
    }

    /// Update a post's fields. Omitted and empty string fields are left
    /// unchanged.
    async fn update_post(
        &self,
        id: ID,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<PostRecord> {
        let post = self
            .resolvers
            .update_post(&PostId::from(id.0), PostPatch { title, content })?;
        Ok(post.into())
    }

    /// Delete a post. False when the id is unknown.
    async fn delete_post(&self, id: ID) -> Result<bool> {
        Ok(self.resolvers.delete_post(&PostId::from(id.0))?)
    }
}
