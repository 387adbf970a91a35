//! The outbound reply seam.

use async_trait::async_trait;

use crate::error::ChannelError;
use crate::pipeline::types::OutboundReply;

/// Destination for threaded replies.
///
/// The production implementation posts to the Slack Web API; tests
/// substitute a recording fake.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &str;

    /// Post a single threaded reply. At most one attempt is made; the
    /// caller decides what to do with failures.
    async fn post_reply(&self, reply: &OutboundReply) -> Result<(), ChannelError>;
}
