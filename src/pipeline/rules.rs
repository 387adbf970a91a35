//! Keyword classifier mapping message text to a fixed documentation pointer.
//!
//! Rules are evaluated in order and the first match wins. Matching is
//! case-sensitive and word-bounded. No match means no reply at all — the
//! dispatcher is never handed empty text.

use regex::Regex;
use tracing::debug;

/// A single classification rule: a compiled pattern and the literal reply
/// it maps to.
#[derive(Debug, Clone)]
pub struct ReplyRule {
    /// Compiled regex for matching.
    regex: Regex,
    /// Fixed reply text posted when this rule matches first.
    reply: &'static str,
}

/// Ordered rule list. Built once at process start and never mutated;
/// rule order is significant.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ReplyRule>,
}

impl RuleSet {
    /// The stock Ray documentation rules, in priority order.
    pub fn default_rules() -> Self {
        let rules = vec![
            ReplyRule {
                regex: Regex::new(r"\bray core\b").unwrap(),
                reply: "Please check out our documentation about Ray Core at https://www.ray.io/ray-core",
            },
            ReplyRule {
                regex: Regex::new(r"\bdatasets?\b").unwrap(),
                reply: "Please check out our documentation about Ray Datasets at https://www.ray.io/ray-datasets",
            },
            ReplyRule {
                regex: Regex::new(r"\btune\b|\btuning\b").unwrap(),
                reply: "Please check out our documentation about Ray Tune at https://www.ray.io/ray-tune",
            },
            ReplyRule {
                regex: Regex::new(r"\bserve\b").unwrap(),
                reply: "Please check out our documentation about Ray Serve at https://www.ray.io/ray-serve",
            },
            ReplyRule {
                regex: Regex::new(r"\btrain\b|\btraining\b").unwrap(),
                reply: "Please check out our documentation about Ray Train at https://www.ray.io/ray-sgd",
            },
            ReplyRule {
                regex: Regex::new(r"\blearning\b").unwrap(),
                reply: "Please check out our documentation about Ray Reinforcement Learning at https://www.ray.io/rllib",
            },
            // Greetings only when the text is exactly the greeting.
            ReplyRule {
                regex: Regex::new(r"^(hi|hello|good morning|hey)$").unwrap(),
                reply: "Hello!",
            },
        ];

        Self { rules }
    }

    /// Create an empty rule set (for testing).
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Classify message text.
    ///
    /// Returns the reply of the first matching rule, or `None` when no rule
    /// matches (no reply should be posted).
    pub fn classify(&self, text: &str) -> Option<&'static str> {
        for rule in &self.rules {
            if rule.regex.is_match(text) {
                debug!(pattern = %rule.regex, "Message matched classification rule");
                return Some(rule.reply);
            }
        }
        None
    }
}
