//! The client chat view: an append-only transcript, a single in-flight
//! exchange, and an optional simulated typing reveal.
//!
//! The view is an event-driven reducer. `submit` validates and appends the
//! user turn, then runs the exchange on a background task; everything that
//! happens afterwards arrives as a [`ViewEvent`] and is folded into the
//! state by [`ChatView::apply`]. Drivers (the console binary, the tests)
//! pump events with [`ChatView::next_event`] or [`ChatView::settle`].

pub mod markdown;
pub mod reveal;
pub mod transport;

pub use transport::{ChatTransport, HttpTransport, ReplyOutcome};

use crate::types::{Message, Turn};
use reveal::TypingReveal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Submissions are accepted iff the trimmed length is within these bounds.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Where the variants differ: whether committed content is trimmed, and
/// whether (and how fast) the reply is revealed character by character.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub trim_content: bool,
    pub reveal_interval: Option<Duration>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            trim_content: true,
            reveal_interval: None,
        }
    }
}

/// Inline validation errors; the messages are what the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Message cannot be empty.")]
    Empty,
    #[error("Max length is 500 characters.")]
    TooLong,
    /// A reply is still pending; the submission has no effect.
    #[error("a reply is still pending")]
    Busy,
}

#[derive(Debug)]
pub enum ViewEvent {
    Outcome(ReplyOutcome),
    RevealTick(char),
    RevealDone,
}

pub struct ChatView {
    transport: Arc<dyn ChatTransport>,
    options: ViewOptions,
    messages: Vec<Message>,
    awaiting_reply: bool,
    /// Scratch buffer of the in-progress reveal; empty outside a reveal.
    revealed: String,
    pending_reveal: Option<String>,
    reveal: Option<TypingReveal>,
    events_tx: mpsc::UnboundedSender<ViewEvent>,
    events_rx: mpsc::UnboundedReceiver<ViewEvent>,
}

impl ChatView {
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self::with_options(transport, ViewOptions::default())
    }

    pub fn with_options(transport: Arc<dyn ChatTransport>, options: ViewOptions) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            transport,
            options,
            messages: Vec::new(),
            awaiting_reply: false,
            revealed: String::new(),
            pending_reveal: None,
            reveal: None,
            events_tx,
            events_rx,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    /// Validate and send. On success the user turn is committed, the
    /// pending flag is set, and the full history goes out on a background
    /// task; the result comes back through the event channel.
    pub fn submit(&mut self, text: &str) -> Result<(), SubmitError> {
        if self.awaiting_reply {
            return Err(SubmitError::Busy);
        }

        let trimmed = text.trim();
        let length = trimmed.chars().count();
        if length == 0 {
            return Err(SubmitError::Empty);
        }
        if length > MAX_MESSAGE_CHARS {
            return Err(SubmitError::TooLong);
        }

        let content = if self.options.trim_content {
            trimmed.to_string()
        } else {
            text.to_string()
        };
        self.messages.push(Message::new_user(content));
        self.awaiting_reply = true;

        // The upstream API is stateless, so every exchange carries the
        // whole conversation.
        let history: Vec<Turn> = self.messages.iter().map(Message::turn).collect();
        let transport = Arc::clone(&self.transport);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = transport.exchange(&history).await;
            let _ = events.send(ViewEvent::Outcome(outcome));
        });

        Ok(())
    }

    /// The reducer. Every failure path ends back in the idle,
    /// resubmittable state; nothing is ever removed from the transcript.
    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Outcome(ReplyOutcome::Reply(turn)) => match self.options.reveal_interval {
                Some(interval) => {
                    self.revealed.clear();
                    self.pending_reveal = Some(turn.content.clone());
                    self.reveal = Some(TypingReveal::start(
                        turn.content,
                        interval,
                        self.events_tx.clone(),
                    ));
                }
                None => self.commit_assistant(turn.content),
            },
            ViewEvent::Outcome(ReplyOutcome::Empty) => {
                // The request simply appears to do nothing; no error is shown.
                tracing::debug!("exchange returned no usable reply content");
                self.awaiting_reply = false;
            }
            ViewEvent::Outcome(ReplyOutcome::Failed(reason)) => {
                tracing::warn!("exchange failed: {reason}");
                self.awaiting_reply = false;
            }
            ViewEvent::RevealTick(ch) => {
                self.revealed.push(ch);
            }
            ViewEvent::RevealDone => {
                if let Some(full) = self.pending_reveal.take() {
                    self.commit_assistant(full);
                }
                self.revealed.clear();
                self.reveal = None;
            }
        }
    }

    /// Stop an in-progress reveal; the full reply is committed immediately.
    pub fn cancel_reveal(&self) {
        if let Some(reveal) = &self.reveal {
            reveal.cancel();
        }
    }

    /// Next event from the exchange task or the reveal timer. Blocks until
    /// one arrives; only call while a reply is pending.
    pub async fn next_event(&mut self) -> Option<ViewEvent> {
        self.events_rx.recv().await
    }

    /// Pump events until the view is idle again.
    pub async fn settle(&mut self) {
        while self.awaiting_reply {
            let Some(event) = self.next_event().await else {
                break;
            };
            self.apply(event);
        }
    }

    fn commit_assistant(&mut self, content: String) {
        self.messages.push(Message::new_assistant(content));
        self.awaiting_reply = false;
    }
}
