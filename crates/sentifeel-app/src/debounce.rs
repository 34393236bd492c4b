//! Quiet-period timer that delays analysis until typing pauses
//!
//! At most one timer is alive at a time: scheduling aborts the previous
//! task before spawning the next one, so only the last change inside a
//! window ever reaches the scorer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::message::Message;

/// Quiet period between the last text change and the analysis
pub const ANALYSIS_DEBOUNCE: Duration = Duration::from_millis(300);

/// Owns the single pending debounce task
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(ANALYSIS_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Send `message` on `msg_tx` once the quiet period elapses,
    /// replacing any timer that is still waiting.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, message: Message, msg_tx: mpsc::Sender<Message>) {
        self.cancel();

        let delay = self.delay;
        debug!("Debounce timer started ({:?})", delay);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if msg_tx.send(message).await.is_err() {
                trace!("Message channel closed before debounce fired");
            }
        }));
    }

    /// Abort the waiting timer, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!("Debounce timer aborted");
            }
            handle.abort();
        }
    }

    /// Whether a timer is still waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
