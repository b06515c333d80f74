//! Read operations. All of them are linear scans joining the two collections
//! at lookup time; none of them can fail and none of them persist.

use byline_types::{PostId, UserId};

use crate::records::{PostWithAuthor, UserWithPosts};
use crate::set::ResolverSet;

impl ResolverSet {
    /// Every user, each paired with the posts they authored.
    pub fn list_users(&self) -> Vec<UserWithPosts> {
        let store = self.lock();
        store
            .users()
            .iter()
            .map(|user| UserWithPosts {
                user: user.clone(),
                posts: store
                    .posts()
                    .iter()
                    .filter(|post| post.author_id == user.id)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// One user and their posts, or `None` when the id is unknown.
    pub fn get_user(&self, id: &UserId) -> Option<UserWithPosts> {
        let store = self.lock();
        let user = store.users().iter().find(|user| &user.id == id)?.clone();
        let posts = store
            .posts()
            .iter()
            .filter(|post| &post.author_id == id)
            .cloned()
            .collect();
        Some(UserWithPosts { user, posts })
    }

    /// Every post, each paired with its author when the author still exists.
    pub fn list_posts(&self) -> Vec<PostWithAuthor> {
        let store = self.lock();
        store
            .posts()
            .iter()
            .map(|post| PostWithAuthor {
                post: post.clone(),
                author: store
                    .users()
                    .iter()
                    .find(|user| user.id == post.author_id)
                    .cloned(),
            })
            .collect()
    }

    /// One post and its author, or `None` when the id is unknown.
    pub fn get_post(&self, id: &PostId) -> Option<PostWithAuthor> {
        let store = self.lock();
        let post = store.posts().iter().find(|post| &post.id == id)?.clone();
        let author = store
            .users()
            .iter()
            .find(|user| user.id == post.author_id)
            .cloned();
        Some(PostWithAuthor { post, author })
    }
}

#[cfg(test)]
mod tests {
    use byline_store::{InMemoryBackend, Snapshot, Store};
    use byline_types::{Post, PostId, User, UserId};

    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::from(id),
            name: name.into(),
            email: format!("{}@x.com", name.to_lowercase()),
            age: None,
        }
    }

    fn post(id: &str, title: &str, author: &str) -> Post {
        Post {
            id: PostId::from(id),
            title: title.into(),
            content: "...".into(),
            author_id: UserId::from(author),
        }
    }

    fn seeded_set() -> ResolverSet {
        let snapshot = Snapshot {
            users: vec![user("u1", "Ann"), user("u2", "Bo")],
            posts: vec![
                post("p1", "Hi", "u1"),
                post("p2", "Again", "u1"),
                post("p3", "Orphan", "gone"),
            ],
        };
        let backend = InMemoryBackend::with_snapshot(snapshot);
        ResolverSet::new(Store::open(backend).unwrap())
    }

    // ---- list_users ----

    #[test]
    fn list_users_joins_each_users_posts() {
        let set = seeded_set();
        let users = set.list_users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user.name, "Ann");
        assert_eq!(users[0].posts.len(), 2);
        assert_eq!(users[0].posts[0].title, "Hi");
        assert_eq!(users[0].posts[1].title, "Again");
        assert!(users[1].posts.is_empty());
    }

    #[test]
    fn list_users_preserves_insertion_order() {
        let set = seeded_set();
        let names: Vec<_> = set.list_users().into_iter().map(|u| u.user.name).collect();
        assert_eq!(names, ["Ann", "Bo"]);
    }

    // ---- get_user ----

    #[test]
    fn get_user_returns_user_and_posts() {
        let set = seeded_set();
        let found = set.get_user(&UserId::from("u1")).unwrap();
        assert_eq!(found.user.email, "ann@x.com");
        assert_eq!(found.posts.len(), 2);
    }

    #[test]
    fn get_user_on_unknown_id_is_none() {
        let set = seeded_set();
        assert!(set.get_user(&UserId::from("nope")).is_none());
    }

    // ---- list_posts ----

    #[test]
    fn list_posts_resolves_authors() {
        let set = seeded_set();
        let posts = set.list_posts();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].author.as_ref().unwrap().name, "Ann");
        assert_eq!(posts[1].author.as_ref().unwrap().name, "Ann");
    }

    #[test]
    fn list_posts_dangling_author_is_none_not_error() {
        let set = seeded_set();
        let posts = set.list_posts();
        assert_eq!(posts[2].post.title, "Orphan");
        assert!(posts[2].author.is_none());
    }

    // ---- get_post ----

    #[test]
    fn get_post_returns_post_and_author() {
        let set = seeded_set();
        let found = set.get_post(&PostId::from("p2")).unwrap();
        assert_eq!(found.post.title, "Again");
        assert_eq!(found.author.unwrap().id, UserId::from("u1"));
    }

    #[test]
    fn get_post_on_unknown_id_is_none() {
        let set = seeded_set();
        assert!(set.get_post(&PostId::from("nope")).is_none());
    }

    // ---- idempotence ----

    #[test]
    fn reads_are_idempotent_without_mutation() {
        let set = seeded_set();
        assert_eq!(set.list_users(), set.list_users());
        assert_eq!(set.list_posts(), set.list_posts());
        assert_eq!(
            set.get_user(&UserId::from("u1")),
            set.get_user(&UserId::from("u1"))
        );
    }
}
