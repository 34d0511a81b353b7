//! Backend fallback responder.

use async_trait::async_trait;
use rand::Rng;

use super::Responder;
use crate::fallback::reply_with;

/// Chooses an index below the given candidate count.
pub type ReplyPicker = Box<dyn Fn(usize) -> usize + Send + Sync>;

/// Answers from the backend reply table, choosing among a group's variants.
///
/// Variants are picked at random unless a picker is injected.
pub struct FallbackResponder {
    picker: ReplyPicker,
}

impl FallbackResponder {
    pub fn new() -> Self {
        Self {
            picker: Box::new(|n: usize| rand::rng().random_range(0..n)),
        }
    }

    /// Replace the random choice (tests pin it to a fixed index).
    pub fn with_picker(mut self, picker: impl Fn(usize) -> usize + Send + Sync + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }
}

impl Default for FallbackResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for FallbackResponder {
    async fn reply(&self, message: &str) -> String {
        reply_with(message, &self.picker).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::{DEFAULT_REPLIES, GREETING_REPLIES, candidates};

    #[tokio::test]
    async fn injected_picker_selects_variant() {
        let r = FallbackResponder::new().with_picker(|_| 2);
        assert_eq!(r.reply("hey").await, GREETING_REPLIES[2]);
        assert!(r.greeting().is_none());
    }

    #[tokio::test]
    async fn random_pick_stays_within_candidates() {
        let r = FallbackResponder::new();
        for _ in 0..20 {
            let reply = r.reply("lorem ipsum").await;
            assert!(DEFAULT_REPLIES.contains(&reply.as_str()));
        }
        let reply = r.reply("hello").await;
        assert!(candidates("hello").contains(&reply.as_str()));
    }
}
