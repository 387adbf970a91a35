//! Inbound and outbound payload types for the Slack Events API.

use serde::Deserialize;

/// Top-level decoded request body, dispatched on the `type` field.
///
/// Decoded once at the router boundary. Anything Slack sends that is
/// neither the handshake nor an event notification lands in `Unrecognized`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum InboundEnvelope {
    /// One-time endpoint-ownership handshake; the challenge must be echoed
    /// back verbatim.
    #[serde(rename = "url_verification")]
    UrlVerification { challenge: String },

    /// A workspace event notification carrying one message event.
    #[serde(rename = "event_callback")]
    EventCallback { event: MessageEvent },

    /// Any other request kind.
    #[serde(other)]
    Unrecognized,
}

/// One chat message notification.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageEvent {
    /// Set when the message was produced by an automated integration.
    #[serde(default)]
    pub bot_id: Option<String>,
    /// Channel the message was posted in.
    pub channel: String,
    /// Message timestamp; used as the thread anchor for the reply.
    pub ts: String,
    /// Message body to classify.
    #[serde(default)]
    pub text: String,
}

impl MessageEvent {
    /// True when the message came from a bot. Any `bot_id` at all counts,
    /// not just our own — replying to any automated sender risks reply
    /// loops.
    pub fn is_self_originated(&self) -> bool {
        self.bot_id.is_some()
    }
}

/// A threaded reply ready to post. Only constructed when the classifier
/// matched, so `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub channel: String,
    pub thread_ts: String,
    pub text: String,
}

impl OutboundReply {
    /// Build a reply anchored to the triggering event's timestamp.
    pub fn for_event(event: &MessageEvent, text: impl Into<String>) -> Self {
        Self {
            channel: event.channel.clone(),
            thread_ts: event.ts.clone(),
            text: text.into(),
        }
    }
}
