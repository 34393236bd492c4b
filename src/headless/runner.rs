//! Headless mode runner - analyze one text and print NDJSON events

use std::io::{self, Read, Write};
use std::sync::Arc;

use tokio::sync::broadcast;

use sentifeel_app::config::Settings;
use sentifeel_app::message::Message;
use sentifeel_app::{Engine, EngineEvent};
use sentifeel_core::is_blank;
use sentifeel_core::prelude::*;
use sentifeel_scorer::{Scorer, VaderScorer};

use super::HeadlessEvent;

/// Run in headless mode: analyze `text` (or stdin when `None`)
pub async fn run_headless(settings: Settings, text: Option<String>) -> Result<()> {
    info!("SentiFeel starting in HEADLESS mode");

    let mut stdout = io::stdout();
    let result = match text {
        Some(text) => Ok(text),
        None => read_stdin(),
    };
    let result = match result {
        Ok(text) => analyze_text(settings, text, Arc::new(VaderScorer::new()), &mut stdout).await,
        Err(e) => Err(e),
    };

    info!("SentiFeel headless mode exiting");
    report_failure(result, &mut stdout)
}

/// Run `text` through the debounced engine, writing each event to `out`
async fn analyze_text<W: Write>(
    settings: Settings,
    text: String,
    scorer: Arc<dyn Scorer>,
    out: &mut W,
) -> Result<()> {
    if is_blank(&text) {
        return Err(Error::EmptyInput);
    }

    let mut engine = Engine::new(settings, scorer);
    let mut events = engine.subscribe();

    engine.process_message(Message::TextChanged(text));
    write_engine_events(&mut events, out)?;

    // Wait out the debounce window; the timer's message arrives on the channel
    while engine.has_pending_analysis() {
        if !engine.process_next().await {
            engine.shutdown();
            return Err(Error::ChannelClosed);
        }
        write_engine_events(&mut events, out)?;
    }

    engine.shutdown();
    Ok(())
}

/// Mirror a failed run as an `error` event, then hand the error back
fn report_failure<W: Write>(result: Result<()>, out: &mut W) -> Result<()> {
    if let Err(e) = &result {
        error!("Headless run failed: {}", e);
        HeadlessEvent::error(e.to_string(), e.is_fatal()).write_to(out)?;
    }
    result
}

/// Read all of stdin, dropping one trailing line break
fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Write every engine event that has a headless counterpart
fn write_engine_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    headless.write_to(out)?;
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Headless output skipped {} engine events", n);
            }
            Err(_) => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentifeel_scorer::test_utils::{FailingScorer, FixedScorer, RecordingScorer};
    use serde_json::Value;

    fn parse_lines(out: &[u8]) -> Vec<Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_is_scheduled_then_completed() {
        let mut out = Vec::new();

        analyze_text(
            Settings::default(),
            "lovely".to_string(),
            Arc::new(FixedScorer::new(0.25)),
            &mut out,
        )
        .await
        .unwrap();

        let events = parse_lines(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "analysis_scheduled");
        assert_eq!(events[0]["generation"], 1);
        assert_eq!(events[0]["characters"], 6);
        assert_eq!(events[1]["event"], "analysis_completed");
        assert_eq!(events[1]["generation"], 1);
        assert_eq!(events[1]["label"], "positive");
        assert_eq!(events[1]["percent"], 80);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scorer_failure_reports_fallback_not_error() {
        let mut out = Vec::new();

        let result = analyze_text(
            Settings::default(),
            "anything".to_string(),
            Arc::new(FailingScorer),
            &mut out,
        )
        .await;
        report_failure(result, &mut out).unwrap();

        let events = parse_lines(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["label"], "neutral");
        assert_eq!(events[1]["confidence"], 0.5);
        assert!(events[1].get("score").is_none());
    }

    #[tokio::test]
    async fn test_blank_text_reports_fatal_error() {
        let scorer = RecordingScorer::new();
        let mut out = Vec::new();

        let result = analyze_text(
            Settings::default(),
            "  \n".to_string(),
            Arc::new(scorer.clone()),
            &mut out,
        )
        .await;
        let err = report_failure(result, &mut out).unwrap_err();

        assert!(matches!(err, Error::EmptyInput));
        assert_eq!(scorer.call_count(), 0);

        let events = parse_lines(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "error");
        assert_eq!(events[0]["message"], "No text to analyze");
        assert_eq!(events[0]["fatal"], true);
    }
}
