//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use sentifeel_app::config::Settings;
use sentifeel_app::{signals, Engine};
use sentifeel_core::prelude::*;
use sentifeel_scorer::VaderScorer;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
///
/// Expects a multi-threaded tokio runtime: the loop blocks on terminal
/// polling while the debounce timer and the signal handler run on other
/// workers.
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting TUI: theme={:?} icons={:?} animations={}",
        settings.ui.theme, settings.ui.icons, settings.ui.animations
    );

    let mut engine = Engine::new(settings, Arc::new(VaderScorer::new()));
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    let restored = terminal::restore();

    result.and(restored)
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Debounce firings and other queued messages
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
