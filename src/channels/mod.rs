//! Channel abstraction for outbound replies.

pub mod channel;
pub mod slack;

pub use channel::ReplySink;
pub use slack::SlackChannel;
