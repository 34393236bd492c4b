//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use sentifeel_scorer::Scorer;

use crate::actions::handle_action;
use crate::debounce::Debouncer;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages, including analysis completions produced by an
/// action, are processed in the same call until none remain.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    debouncer: &mut Debouncer,
    scorer: &dyn Scorer,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        let from_action = result
            .action
            .and_then(|action| handle_action(action, debouncer, scorer, msg_tx));

        // An update never yields both a follow-up and an action
        msg = result.message.or(from_action);
    }
}
