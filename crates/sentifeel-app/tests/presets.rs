//! Presets against the real lexicon scorer

use std::sync::Arc;
use std::time::Duration;

use sentifeel_app::config::Settings;
use sentifeel_app::{Engine, Message, Preset};
use sentifeel_core::Label;
use sentifeel_scorer::VaderScorer;

async fn run_preset(preset: Preset) -> Engine {
    let mut engine = Engine::new(Settings::default(), Arc::new(VaderScorer::new()));
    engine.process_message(Message::ApplyPreset(preset));
    tokio::time::sleep(Duration::from_secs(1)).await;
    engine.drain_pending_messages();
    engine
}

#[tokio::test(start_paused = true)]
async fn positive_preset_is_positive() {
    let engine = run_preset(Preset::Positive).await;
    assert_eq!(engine.state.text(), Preset::Positive.text());
    assert_eq!(engine.state.result.label, Label::Positive);
    assert!(engine.state.result.confidence > 0.8);
}

#[tokio::test(start_paused = true)]
async fn negative_preset_is_negative() {
    let engine = run_preset(Preset::Negative).await;
    assert_eq!(engine.state.result.label, Label::Negative);
    assert!(engine.state.result.confidence > 0.8);
}

#[tokio::test(start_paused = true)]
async fn neutral_preset_is_neutral() {
    let engine = run_preset(Preset::Neutral).await;
    assert_eq!(engine.state.result.label, Label::Neutral);
}
