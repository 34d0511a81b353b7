//! # folio_core
//!
//! Core chat domain logic for Folio.
//!
//! # Public API
//!
//! - [`message::ChatMessage`] — one entry of a chat transcript
//! - [`transcript::Transcript`] — append-only, ordered message list
//! - [`keywords::classify_and_reply`] — static keyword-matched replies
//! - [`fallback::reply_with`] — chat backend reply table
//! - [`responder::Responder`] — turns a user message into a bot reply
//! - [`widget::ChatWidget`] — `Idle -> Pending -> Idle` controller
//! - [`contact::ContactClient`] — contact form submission

pub mod contact;
pub mod fallback;
pub mod keywords;
pub mod message;
pub mod responder;
pub mod transcript;
pub mod view;
pub mod widget;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
