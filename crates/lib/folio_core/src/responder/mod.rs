//! Responder strategies — turn one user message into one bot reply.
//!
//! - [`keyword::KeywordResponder`] — local keyword table, artificial delay, no I/O
//! - [`fallback::FallbackResponder`] — backend reply table with varied replies
//! - [`server::ServerResponder`] — posts to a chat endpoint through a [`server::ChatTransport`]
//!
//! Responders never fail: transport and semantic errors are mapped to fixed
//! user-visible replies at this boundary.

pub mod fallback;
pub mod keyword;
pub mod server;

use async_trait::async_trait;

pub use fallback::FallbackResponder;
pub use keyword::KeywordResponder;
pub use server::{ChatTransport, ReqwestTransport, ServerResponder, TransportError};

/// Reply produced when the server answers without a usable `response` field.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Reply produced when the chat endpoint cannot be reached.
pub const CONNECTION_ERROR_REPLY: &str =
    "Sorry, I encountered a connection error. Please check the server.";

/// Strategy producing bot replies for a chat widget.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Reply to a trimmed, non-empty user message.
    async fn reply(&self, message: &str) -> String;

    /// Bot message shown before the user says anything.
    fn greeting(&self) -> Option<&str> {
        None
    }
}
