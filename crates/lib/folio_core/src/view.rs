//! Transcript rendering contract.

use crate::message::ChatMessage;

/// Where the widget draws its transcript.
///
/// `render` appends one message (avatar plus text, newlines as line breaks)
/// and keeps the newest entry in view. `set_pending` toggles the typing
/// indicator and disables/enables the input.
pub trait TranscriptView {
    fn render(&mut self, message: &ChatMessage);

    fn set_pending(&mut self, pending: bool);
}

/// Something the widget asked a view to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Rendered(ChatMessage),
    Pending(bool),
}

/// In-memory view recording every call, in order.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: Vec<ViewEvent>,
    pending: bool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Messages rendered so far.
    pub fn rendered(&self) -> impl Iterator<Item = &ChatMessage> {
        self.events.iter().filter_map(|e| match e {
            ViewEvent::Rendered(m) => Some(m),
            ViewEvent::Pending(_) => None,
        })
    }
}

impl TranscriptView for RecordingView {
    fn render(&mut self, message: &ChatMessage) {
        self.events.push(ViewEvent::Rendered(message.clone()));
    }

    fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
        self.events.push(ViewEvent::Pending(pending));
    }
}
