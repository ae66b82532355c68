use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment left by a reader on a post.
///
/// `post_id` is the raw id from the request path and is never checked
/// against the posts collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(post_id: String, name: String, email: String, comment: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            name,
            email,
            comment,
            created_at: Utc::now(),
        }
    }
}
