//! Comment notification port.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Comment;

/// The fixed payload sent out when a reader comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentNotice {
    pub post_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl CommentNotice {
    pub fn subject(&self) -> String {
        format!("New comment on post {}", self.post_id)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPost: {}\n\n{}",
            self.name, self.email, self.post_id, self.comment
        )
    }
}

impl From<&Comment> for CommentNotice {
    fn from(comment: &Comment) -> Self {
        Self {
            post_id: comment.post_id.clone(),
            name: comment.name.clone(),
            email: comment.email.clone(),
            comment: comment.comment.clone(),
        }
    }
}

/// Delivers comment notices. Callers treat delivery as best-effort.
#[async_trait]
pub trait CommentNotifier: Send + Sync {
    async fn notify(&self, notice: &CommentNotice) -> Result<(), NotifyError>;
}

/// Notification errors.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification transport failed: {0}")]
    Transport(String),

    #[error("Notification rejected with status {0}")]
    Rejected(u16),

    #[error("Notification timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_carries_all_comment_fields() {
        let comment = Comment::new(
            "abc".to_string(),
            "Ada".to_string(),
            "ada@example.com".to_string(),
            "Nice post".to_string(),
        );

        let notice = CommentNotice::from(&comment);

        assert_eq!(notice.subject(), "New comment on post abc");
        let body = notice.body();
        assert!(body.contains("Ada"));
        assert!(body.contains("ada@example.com"));
        assert!(body.contains("Nice post"));
    }
}
