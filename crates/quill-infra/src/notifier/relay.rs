//! HTTP mail relay notifier - hands the notice to a mail API as JSON.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use quill_core::ports::{CommentNotice, CommentNotifier, NotifyError};

/// Outbound mail settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub relay_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub to: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct MailPayload<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

/// Sends comment notices through an HTTP mail relay.
pub struct MailRelayNotifier {
    config: MailConfig,
    client: reqwest::Client,
}

impl MailRelayNotifier {
    pub fn new(config: MailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self { config, client }
    }

    fn payload<'a>(&'a self, notice: &CommentNotice) -> MailPayload<'a> {
        MailPayload {
            from: &self.config.from,
            to: &self.config.to,
            subject: notice.subject(),
            text: notice.body(),
        }
    }
}

#[async_trait]
impl CommentNotifier for MailRelayNotifier {
    async fn notify(&self, notice: &CommentNotice) -> Result<(), NotifyError> {
        let mut request = self
            .client
            .post(&self.config.relay_url)
            .json(&self.payload(notice));

        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_deref());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                NotifyError::Timeout
            } else {
                NotifyError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected(status.as_u16()));
        }

        tracing::debug!(post_id = %notice.post_id, "Comment notice delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(relay_url: &str) -> MailConfig {
        MailConfig {
            relay_url: relay_url.to_string(),
            username: None,
            password: None,
            from: "blog@localhost".to_string(),
            to: "admin@localhost".to_string(),
            timeout: Duration::from_secs(2),
        }
    }

    fn notice() -> CommentNotice {
        CommentNotice {
            post_id: "42".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            comment: "Great read".to_string(),
        }
    }

    #[test]
    fn test_payload_carries_envelope_and_notice() {
        let notifier = MailRelayNotifier::new(config("http://localhost/send"));

        let payload = serde_json::to_value(notifier.payload(&notice())).unwrap();

        assert_eq!(payload["from"], "blog@localhost");
        assert_eq!(payload["to"], "admin@localhost");
        assert_eq!(payload["subject"], "New comment on post 42");
        assert!(payload["text"].as_str().unwrap().contains("Great read"));
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_an_error() {
        let notifier = MailRelayNotifier::new(config("http://127.0.0.1:9/send"));

        assert!(notifier.notify(&notice()).await.is_err());
    }
}
