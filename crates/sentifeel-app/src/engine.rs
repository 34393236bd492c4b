//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the debounce timer
//! and the scorer. Frontends feed it messages and read `state` back.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use sentifeel_scorer::Scorer;

use crate::config::Settings;
use crate::debounce::Debouncer;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the engine event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, Copy)]
struct StateSnapshot {
    generation: u64,
    pending_generation: Option<u64>,
    analysis_count: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            generation: state.generation(),
            pending_generation: state.pending_generation(),
            analysis_count: state.analysis_count(),
        }
    }
}

/// Orchestration engine for SentiFeel.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// The debouncer sends `AnalysisDue` through a clone of it.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// The single pending analysis timer
    debouncer: Debouncer,

    /// Scoring backend used for every analysis
    scorer: Arc<dyn Scorer>,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an Engine with the default 300 ms debounce window
    pub fn new(settings: Settings, scorer: Arc<dyn Scorer>) -> Self {
        Self::with_debouncer(settings, scorer, Debouncer::default())
    }

    pub fn with_debouncer(
        settings: Settings,
        scorer: Arc<dyn Scorer>,
        debouncer: Debouncer,
    ) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            debouncer,
            scorer,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// Subscribers that fall behind lose the oldest events
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Must be called from within a tokio runtime, since scheduling spawns
    /// the debounce task.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &mut self.debouncer,
            self.scorer.as_ref(),
        );

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message on the channel and process it.
    ///
    /// Returns false once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Whether an analysis is scheduled but not yet run
    pub fn has_pending_analysis(&self) -> bool {
        self.state.has_pending_analysis()
    }

    /// Abort the pending timer and notify subscribers
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        self.emit(EngineEvent::Shutdown);
        debug!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.pending_generation.is_some() && post.pending_generation != pre.pending_generation
        {
            if let Some(generation) = post.pending_generation {
                self.emit(EngineEvent::AnalysisScheduled {
                    generation,
                    characters: self.state.text_stats().characters,
                });
            }
        }

        if post.analysis_count > pre.analysis_count {
            self.emit(EngineEvent::AnalysisCompleted {
                generation: post.generation,
                result: self.state.result,
            });
        }

        // Generation bumped with nothing left pending and no new result:
        // blank input cleared the result
        if post.generation != pre.generation
            && post.pending_generation.is_none()
            && post.analysis_count == pre.analysis_count
        {
            self.emit(EngineEvent::ResultCleared);
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is not an error
        let _ = self.event_tx.send(event);
    }
}
