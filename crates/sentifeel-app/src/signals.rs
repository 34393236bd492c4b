//! OS signal handling: SIGINT / SIGTERM end the session like a quit key

use tokio::sync::mpsc;

use sentifeel_core::prelude::*;

use crate::message::Message;

/// Spawn a task that sends `Message::Quit` on the first termination signal
///
/// Must be called from within a tokio runtime.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return;
        }

        info!("Shutdown signal received");
        if let Err(e) = forward_quit(&tx).await {
            warn!("Quit after signal not delivered: {}", e);
        }
    });
}

async fn forward_quit(tx: &mpsc::Sender<Message>) -> Result<()> {
    tx.send(Message::Quit)
        .await
        .map_err(|e| Error::channel_send(e.to_string()))
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => debug!("Received SIGINT"),
            _ = sigterm.recv() => debug!("Received SIGTERM"),
        }

        Ok(())
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        debug!("Received Ctrl+C");
        Ok(())
    }
}
