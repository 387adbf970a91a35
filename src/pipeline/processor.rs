//! Event processor — filters inbound message events, classifies the text,
//! and hands matched replies to the channel.
//!
//! Flow:
//! 1. Self-origin filter (any `bot_id` present → drop)
//! 2. Keyword classification → optional reply text
//! 3. Threaded reply dispatch
//!
//! The processor runs detached from the HTTP ack: the router has already
//! answered 200 by the time `process` runs, so dispatch failures are logged
//! and swallowed rather than surfaced.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::channels::ReplySink;
use crate::pipeline::rules::RuleSet;
use crate::pipeline::types::{MessageEvent, OutboundReply};

/// Event processor — the core of the pipeline.
pub struct EventProcessor {
    rules: RuleSet,
    sink: Arc<dyn ReplySink>,
}

impl EventProcessor {
    /// Create a new event processor.
    pub fn new(rules: RuleSet, sink: Arc<dyn ReplySink>) -> Self {
        Self { rules, sink }
    }

    /// Whether an event should be replied to at all.
    ///
    /// Bot-originated events are dropped. Everything else passes, including
    /// empty or unclassifiable text — that is the classifier's call, not the
    /// filter's.
    pub fn should_process(&self, event: &MessageEvent) -> bool {
        !event.is_self_originated()
    }

    /// Run one event through filter → classifier → dispatch.
    ///
    /// Best-effort delivery: at most one post attempt, no retry, and a
    /// failed post never propagates.
    pub async fn process(&self, event: MessageEvent) {
        if !self.should_process(&event) {
            debug!(
                channel = %event.channel,
                ts = %event.ts,
                "Dropping bot-originated event"
            );
            return;
        }

        let Some(text) = self.rules.classify(&event.text) else {
            debug!(
                channel = %event.channel,
                ts = %event.ts,
                "No classification match, no reply"
            );
            return;
        };

        info!(channel = %event.channel, ts = %event.ts, "Posting threaded reply");

        let reply = OutboundReply::for_event(&event, text);
        if let Err(e) = self.sink.post_reply(&reply).await {
            error!(
                error = %e,
                channel = %reply.channel,
                channel_name = self.sink.name(),
                "Failed to post reply"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::ChannelError;

    /// Records every reply it is handed.
    #[derive(Default)]
    struct RecordingSink {
        posts: Mutex<Vec<OutboundReply>>,
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        async fn post_reply(&self, reply: &OutboundReply) -> Result<(), ChannelError> {
            self.posts.lock().unwrap().push(reply.clone());
            Ok(())
        }
    }

    /// Fails every post, to prove failures are swallowed.
    struct FailingSink;

    #[async_trait]
    impl ReplySink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        async fn post_reply(&self, _reply: &OutboundReply) -> Result<(), ChannelError> {
            Err(ChannelError::SendFailed {
                name: "failing".into(),
                reason: "unreachable".into(),
            })
        }
    }

    fn event(text: &str) -> MessageEvent {
        MessageEvent {
            bot_id: None,
            channel: "C123".into(),
            ts: "1700000000.000100".into(),
            text: text.into(),
        }
    }

    fn processor(sink: Arc<dyn ReplySink>) -> EventProcessor {
        EventProcessor::new(RuleSet::default_rules(), sink)
    }

    #[tokio::test]
    async fn greeting_produces_threaded_reply() {
        let sink = Arc::new(RecordingSink::default());
        let proc = processor(Arc::clone(&sink) as Arc<dyn ReplySink>);

        proc.process(event("hi")).await;

        let posts = sink.posts.lock().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "Hello!");
        assert_eq!(posts[0].channel, "C123");
        assert_eq!(posts[0].thread_ts, "1700000000.000100");
    }

    #[tokio::test]
    async fn bot_events_are_filtered() {
        let sink = Arc::new(RecordingSink::default());
        let proc = processor(Arc::clone(&sink) as Arc<dyn ReplySink>);

        let mut ev = event("hi");
        ev.bot_id = Some("B042".into());
        assert!(!proc.should_process(&ev));

        proc.process(ev).await;
        assert!(sink.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn any_bot_id_counts_as_self_originated() {
        // Not just our own bot's id — any automated sender is dropped.
        let sink = Arc::new(RecordingSink::default());
        let proc = processor(Arc::clone(&sink) as Arc<dyn ReplySink>);

        let mut ev = event("tune");
        ev.bot_id = Some("B-some-other-bot".into());
        proc.process(ev).await;

        assert!(sink.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unmatched_text_makes_no_call() {
        let sink = Arc::new(RecordingSink::default());
        let proc = processor(Arc::clone(&sink) as Arc<dyn ReplySink>);

        proc.process(event("nothing relevant here")).await;
        assert!(sink.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_text_passes_filter_but_never_posts() {
        let sink = Arc::new(RecordingSink::default());
        let proc = processor(Arc::clone(&sink) as Arc<dyn ReplySink>);

        let ev = event("");
        assert!(proc.should_process(&ev));

        proc.process(ev).await;
        assert!(sink.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn dispatch_failure_is_swallowed() {
        let proc = processor(Arc::new(FailingSink));
        // Must not panic or propagate.
        proc.process(event("hi")).await;
    }

    #[tokio::test]
    async fn repeated_events_are_not_deduplicated() {
        let sink = Arc::new(RecordingSink::default());
        let proc = processor(Arc::clone(&sink) as Arc<dyn ReplySink>);

        proc.process(event("hi")).await;
        proc.process(event("hi")).await;

        let posts = sink.posts.lock().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], posts[1]);
    }
}
