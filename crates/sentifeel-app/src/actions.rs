//! Action handlers: UpdateAction dispatch

use tokio::sync::mpsc;
use tracing::debug;

use sentifeel_scorer::{analyze, Scorer};

use crate::debounce::Debouncer;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action produced by `update`
///
/// Timer actions go through the debouncer. Analysis runs inline on the
/// calling task and its outcome comes back as a follow-up message.
pub fn handle_action(
    action: UpdateAction,
    debouncer: &mut Debouncer,
    scorer: &dyn Scorer,
    msg_tx: &mpsc::Sender<Message>,
) -> Option<Message> {
    match action {
        UpdateAction::ScheduleAnalysis { generation } => {
            debouncer.schedule(Message::AnalysisDue { generation }, msg_tx.clone());
            None
        }

        UpdateAction::CancelAnalysis => {
            debouncer.cancel();
            None
        }

        UpdateAction::RunAnalysis { generation, text } => {
            debug!(
                "Running analysis for generation {} ({} chars)",
                generation,
                text.chars().count()
            );
            let result = analyze(scorer, &text);
            Some(Message::AnalysisCompleted { generation, result })
        }
    }
}
