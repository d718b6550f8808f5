//! The simulated typing reveal.
//!
//! Purely cosmetic: the full reply has already arrived. A task paces one
//! character per fixed interval into the view's event channel; cancelling
//! stops the timer and lets the reducer commit the full text immediately
//! instead of the timer running on to completion.

use super::ViewEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;

pub struct TypingReveal {
    cancel: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl TypingReveal {
    pub fn start(
        text: String,
        interval: Duration,
        events: mpsc::UnboundedSender<ViewEvent>,
    ) -> Self {
        let cancel = Arc::new(Notify::new());
        let cancelled = Arc::clone(&cancel);

        let handle = tokio::spawn(async move {
            for ch in text.chars() {
                tokio::select! {
                    _ = cancelled.notified() => break,
                    _ = tokio::time::sleep(interval) => {
                        if events.send(ViewEvent::RevealTick(ch)).is_err() {
                            // View is gone, nobody left to commit to.
                            return;
                        }
                    }
                }
            }
            let _ = events.send(ViewEvent::RevealDone);
        });

        Self { cancel, handle }
    }

    /// Stop ticking. The task still emits `RevealDone`, so the reducer
    /// commits the full reply as usual.
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }
}

impl Drop for TypingReveal {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reveals_every_character_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _reveal = TypingReveal::start("abc".to_string(), Duration::from_millis(1), tx);

        let mut revealed = String::new();
        loop {
            match rx.recv().await.unwrap() {
                ViewEvent::RevealTick(ch) => revealed.push(ch),
                ViewEvent::RevealDone => break,
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert_eq!(revealed, "abc");
    }

    #[tokio::test]
    async fn cancel_short_circuits_to_done() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let reveal = TypingReveal::start("slow reveal".to_string(), Duration::from_secs(30), tx);

        reveal.cancel();

        // No thirty-second tick ever fires; Done arrives right away.
        match rx.recv().await.unwrap() {
            ViewEvent::RevealDone => {}
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
