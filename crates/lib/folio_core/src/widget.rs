//! Chat widget controller.
//!
//! Owns the transcript, the responder and the view for one session and runs
//! the `Idle -> Pending -> Idle` exchange cycle. Submissions are serialized by
//! `&mut self`, so every user message is immediately followed by its reply.

use crate::message::ChatMessage;
use crate::responder::Responder;
use crate::transcript::Transcript;
use crate::view::TranscriptView;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    /// One exchange is in flight; input is disabled.
    Pending,
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty or whitespace only; nothing changed.
    Empty,
    /// An earlier exchange never completed; the input is still disabled.
    Busy,
    /// The user message and the bot reply were both appended.
    Replied(String),
}

pub struct ChatWidget<V> {
    transcript: Transcript,
    responder: Box<dyn Responder>,
    view: V,
    state: WidgetState,
}

impl<V: TranscriptView> ChatWidget<V> {
    /// Builds the widget and renders the responder's greeting, if it has one.
    pub fn new(responder: Box<dyn Responder>, view: V) -> Self {
        let mut widget = Self {
            transcript: Transcript::new(),
            responder,
            view,
            state: WidgetState::Idle,
        };
        if let Some(greeting) = widget.responder.greeting().map(str::to_owned) {
            widget.append(ChatMessage::bot(greeting));
        }
        widget
    }

    /// Runs one exchange for the raw input text.
    ///
    /// If this future is dropped before the responder resolves, the widget
    /// stays [`WidgetState::Pending`] and later submissions return
    /// [`Submission::Busy`].
    pub async fn submit(&mut self, raw: &str) -> Submission {
        let message = raw.trim();
        if message.is_empty() {
            return Submission::Empty;
        }
        if self.state == WidgetState::Pending {
            log::debug!("submission ignored, exchange still pending");
            return Submission::Busy;
        }

        self.append(ChatMessage::user(message));
        self.state = WidgetState::Pending;
        self.view.set_pending(true);

        let reply = self.responder.reply(message).await;

        self.view.set_pending(false);
        self.state = WidgetState::Idle;
        self.append(ChatMessage::bot(reply.clone()));
        Submission::Replied(reply)
    }

    fn append(&mut self, message: ChatMessage) {
        let message = self.transcript.append(message);
        self.view.render(message);
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
