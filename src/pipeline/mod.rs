//! Event-processing pipeline: payload types, keyword rules, and the
//! filter → classify → dispatch chain.

pub mod processor;
pub mod rules;
pub mod types;

pub use processor::EventProcessor;
pub use rules::RuleSet;
pub use types::{InboundEnvelope, MessageEvent, OutboundReply};
