//! Terminal host for the chat widget.

use std::io::{IsTerminal, Write};
use std::time::Duration;

use folio_core::message::ChatMessage;
use folio_core::responder::{KeywordResponder, Responder, ServerResponder};
use folio_core::view::TranscriptView;
use folio_core::widget::{ChatWidget, Submission};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::Result;

const TYPING: &str = "bot is typing...";

/// Writes the transcript as `[avatar] text` lines.
pub struct TerminalView<W> {
    out: W,
    typing_indicator: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, typing_indicator: bool) -> Self {
        Self {
            out,
            typing_indicator,
        }
    }

    fn write_message(&mut self, message: &ChatMessage) -> std::io::Result<()> {
        let prefix = format!("[{}] ", message.sender().avatar());
        let indent = " ".repeat(prefix.len());
        for (i, line) in message.lines().enumerate() {
            let lead = if i == 0 { prefix.as_str() } else { indent.as_str() };
            writeln!(self.out, "{lead}{line}")?;
        }
        self.out.flush()
    }

    fn write_typing(&mut self, pending: bool) -> std::io::Result<()> {
        if pending {
            write!(self.out, "{TYPING}")?;
        } else {
            // Erase the indicator line.
            write!(self.out, "\r\x1b[2K")?;
        }
        self.out.flush()
    }
}

impl<W: Write> TranscriptView for TerminalView<W> {
    fn render(&mut self, message: &ChatMessage) {
        if let Err(e) = self.write_message(message) {
            log::warn!("failed to render message: {e}");
        }
    }

    fn set_pending(&mut self, pending: bool) {
        if !self.typing_indicator {
            return;
        }
        if let Err(e) = self.write_typing(pending) {
            log::warn!("failed to update typing indicator: {e}");
        }
    }
}

/// Picks the responder for this session.
pub fn responder(server: &str, static_replies: bool, delay_ms: u64) -> Result<Box<dyn Responder>> {
    if static_replies {
        log::info!("static replies, delay {delay_ms}ms");
        Ok(Box::new(
            KeywordResponder::new().with_delay(Duration::from_millis(delay_ms)),
        ))
    } else {
        log::info!("server-backed replies via {server}");
        Ok(Box::new(ServerResponder::from_base_url(server)?))
    }
}

/// Reads lines from stdin until EOF or `/quit`, one exchange per line.
pub async fn run(responder: Box<dyn Responder>) -> Result<()> {
    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let view = TerminalView::new(std::io::stdout(), interactive);
    let mut widget = ChatWidget::new(responder, view);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "/quit" | "/exit") {
            break;
        }
        match widget.submit(&line).await {
            Submission::Replied(_) | Submission::Empty => {}
            Submission::Busy => log::warn!("still waiting for the previous reply"),
        }
    }

    log::debug!("chat ended after {} messages", widget.transcript().len());
    Ok(())
}
