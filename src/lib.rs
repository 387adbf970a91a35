//! Ray Docs Bot — Slack Events API webhook responder.
//!
//! Answers the endpoint-verification handshake, filters out bot-originated
//! events, classifies message text against a fixed keyword rule list, and
//! posts a threaded documentation pointer back to the originating channel.

pub mod channels;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod server;
