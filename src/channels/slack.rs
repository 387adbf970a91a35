//! Slack channel — posts threaded replies via the Web API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::channels::ReplySink;
use crate::error::ChannelError;
use crate::pipeline::types::OutboundReply;

/// Slack Web API base URL.
const SLACK_API_BASE: &str = "https://slack.com/api";

/// Slack channel — sends `chat.postMessage` calls with the bot token.
pub struct SlackChannel {
    bot_token: SecretString,
    api_base: String,
    client: reqwest::Client,
}

impl SlackChannel {
    pub fn new(bot_token: SecretString) -> Self {
        Self::with_api_base(bot_token, SLACK_API_BASE)
    }

    /// Create a channel pointed at a non-default API base (used by tests).
    pub fn with_api_base(bot_token: SecretString, api_base: impl Into<String>) -> Self {
        Self {
            bot_token,
            api_base: api_base.into(),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }
}

#[async_trait]
impl ReplySink for SlackChannel {
    fn name(&self) -> &str {
        "slack"
    }

    /// Single URL-encoded POST to `chat.postMessage`. No retry: the inbound
    /// ack has already been sent, so a failure here is only ever logged.
    async fn post_reply(&self, reply: &OutboundReply) -> Result<(), ChannelError> {
        let form = [
            ("token", self.bot_token.expose_secret()),
            ("channel", reply.channel.as_str()),
            ("thread_ts", reply.thread_ts.as_str()),
            ("text", reply.text.as_str()),
        ];

        let resp = self
            .client
            .post(self.api_url("chat.postMessage"))
            .form(&form)
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: "slack".into(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(ChannelError::SendFailed {
                name: "slack".into(),
                reason: format!("chat.postMessage returned {status}: {body}"),
            });
        }

        tracing::debug!(
            channel = %reply.channel,
            thread_ts = %reply.thread_ts,
            response = %body,
            "Reply posted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> SlackChannel {
        SlackChannel::new(SecretString::from("xoxb-fake".to_string()))
    }

    #[test]
    fn slack_channel_name() {
        assert_eq!(channel().name(), "slack");
    }

    #[test]
    fn slack_api_url() {
        assert_eq!(
            channel().api_url("chat.postMessage"),
            "https://slack.com/api/chat.postMessage"
        );
    }

    #[test]
    fn custom_api_base_overrides_default() {
        let ch = SlackChannel::with_api_base(
            SecretString::from("xoxb-fake".to_string()),
            "http://127.0.0.1:9",
        );
        assert_eq!(ch.api_url("chat.postMessage"), "http://127.0.0.1:9/chat.postMessage");
    }

    #[tokio::test]
    async fn post_reply_reports_transport_errors() {
        // Port 9 is unroutable locally, so the send fails fast.
        let ch = SlackChannel::with_api_base(
            SecretString::from("xoxb-fake".to_string()),
            "http://127.0.0.1:9",
        );
        let reply = OutboundReply {
            channel: "C123".into(),
            thread_ts: "1.2".into(),
            text: "Hello!".into(),
        };

        let err = ch.post_reply(&reply).await.unwrap_err();
        assert!(matches!(err, ChannelError::SendFailed { .. }));
    }
}
