use serde::{Deserialize, Serialize};

use crate::ids::{PostId, UserId};

/// A post record.
///
/// `author_id` references the owning [`User`](crate::User) by id. The
/// reference is validated when the post is created and never re-checked
/// afterward; deleting a user removes its posts instead. Persisted records
/// carry the field as `authorId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample_post() -> Post {
        Post {
            id: PostId::from("9f8e7d6c"),
            title: "Hi".into(),
            content: "World".into(),
            author_id: UserId::from("1a2b3c4d"),
        }
    }

    #[test]
    fn author_id_serializes_in_camel_case() {
        let json = serde_json::to_value(sample_post()).unwrap();
        assert_eq!(json["authorId"], "1a2b3c4d");
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn snake_case_author_id_is_rejected() {
        let res = serde_json::from_str::<Post>(
            r#"{"id":"p1","title":"t","content":"c","author_id":"u1"}"#,
        );
        assert!(res.is_err());
    }

    proptest! {
        #[test]
        fn json_roundtrip(title in ".*", content in ".*") {
            let post = Post {
                id: PostId::generate(),
                title,
                content,
                author_id: UserId::generate(),
            };
            let json = serde_json::to_string(&post).unwrap();
            let parsed: Post = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, post);
        }
    }
}
