//! Static keyword responder.

use std::time::Duration;

use async_trait::async_trait;

use super::Responder;
use crate::keywords::{STATIC_GREETING, classify_and_reply};

/// Default artificial "thinking" delay before a static reply.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Answers from the keyword table after a fixed delay. Never touches the network.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    delay: Duration,
    greeting: Option<String>,
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            greeting: Some(STATIC_GREETING.to_string()),
        }
    }

    /// Replace the artificial delay (tests use `Duration::ZERO`).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace or drop the opening greeting.
    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        self.greeting = greeting;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for KeywordResponder {
    async fn reply(&self, message: &str) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        classify_and_reply(message).to_string()
    }

    fn greeting(&self) -> Option<&str> {
        self.greeting.as_deref()
    }
}
