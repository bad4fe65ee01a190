//! Canned chatbot for the KindKart page.
//!
//! An ordered table of `(trigger, reply)` pairs evaluated top to bottom;
//! the first trigger found in the message wins, otherwise the default
//! reply is returned. Matching is case-insensitive substring, the same
//! semantics as bias detection.

use regex::Regex;
use std::sync::LazyLock;

/// One row of the reply table.
#[derive(Debug, Clone)]
struct ChatRule {
    trigger: Regex,
    reply: String,
}

impl ChatRule {
    /// Compile a trigger as a case-insensitive literal substring match.
    // NOTE: expect() is acceptable here: an escaped literal is always a
    // valid pattern, so a failure means an unrecoverable startup bug.
    fn new(trigger: &str, reply: &str) -> Self {
        let pattern = format!("(?i){}", regex::escape(trigger));
        Self {
            trigger: Regex::new(&pattern).expect("Invalid regex: escaped chat trigger"),
            reply: reply.to_string(),
        }
    }
}

static DEFAULT_RULES: LazyLock<Vec<ChatRule>> = LazyLock::new(|| {
    vec![
        ChatRule::new("hello", "Hi there! Welcome to KindKart."),
        ChatRule::new(
            "donate",
            "That's wonderful! Use the form to list your item and it will appear on the board.",
        ),
        ChatRule::new(
            "pickup",
            "Most donors arrange pickup directly. Check the item's pin on the map.",
        ),
        ChatRule::new(
            "location",
            "Add the item's location in the form and we'll pin it on the map.",
        ),
        ChatRule::new("thank", "Happy to help. Every little bit counts!"),
        ChatRule::new("bye", "Goodbye! Thanks for spreading kindness."),
    ]
});

const DEFAULT_REPLY: &str = "I'm a simple helper bot. Try asking about donating an item.";

/// Keyword-triggered reply bot with first-match-wins semantics.
#[derive(Debug, Clone)]
pub struct ChatBot {
    rules: Vec<ChatRule>,
    default_reply: String,
}

impl Default for ChatBot {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatBot {
    /// Create a bot with the built-in KindKart reply table.
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
            default_reply: DEFAULT_REPLY.to_string(),
        }
    }

    /// Create a bot from a custom ordered `(trigger, reply)` table.
    pub fn with_rules<'a, I>(rules: I, default_reply: &str) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(trigger, reply)| ChatRule::new(trigger, reply))
                .collect(),
            default_reply: default_reply.to_string(),
        }
    }

    /// Reply to a message: first matching trigger wins, default otherwise.
    pub fn reply(&self, message: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.trigger.is_match(message))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.default_reply)
    }
}
