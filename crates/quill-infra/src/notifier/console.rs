//! Notifier that only writes notices to the log (for development).

use async_trait::async_trait;

use quill_core::ports::{CommentNotice, CommentNotifier, NotifyError};

pub struct LogNotifier;

#[async_trait]
impl CommentNotifier for LogNotifier {
    async fn notify(&self, notice: &CommentNotice) -> Result<(), NotifyError> {
        tracing::info!(
            post_id = %notice.post_id,
            from = %notice.name,
            subject = %notice.subject(),
            "Comment notice (mail relay not configured)"
        );
        Ok(())
    }
}
