//! Application state (Model in TEA pattern)

use std::time::Instant;

use sentifeel_core::{SentimentResult, TextStats};

use crate::animation::ConfidenceAnimation;
use crate::config::{Settings, ThemeMode};
use crate::presets::Preset;
use crate::text_input::TextInput;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Preset(Preset),
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Input,
        Focus::Preset(Preset::Positive),
        Focus::Preset(Preset::Negative),
        Focus::Preset(Preset::Neutral),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current lifecycle phase
    pub phase: AppPhase,

    /// Text being analyzed
    pub input: TextInput,

    /// Latest analysis; replaced wholesale
    pub result: SentimentResult,

    /// Focused control
    pub focus: Focus,

    /// Active color scheme
    pub theme: ThemeMode,

    /// Loaded settings
    pub settings: Settings,

    /// Eased value drawn by the confidence bar
    pub confidence_animation: ConfidenceAnimation,

    /// Bumped on every text change; identifies the latest schedule
    generation: u64,

    /// Generation whose debounce timer is still running, if any
    pending_generation: Option<u64>,

    /// Number of results applied so far
    analysis_count: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            input: TextInput::new(),
            result: SentimentResult::none(),
            focus: Focus::Input,
            theme: settings.ui.theme,
            settings,
            confidence_animation: ConfidenceAnimation::default(),
            generation: 0,
            pending_generation: None,
            analysis_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn text_stats(&self) -> TextStats {
        TextStats::of(self.input.text())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_generation(&self) -> Option<u64> {
        self.pending_generation
    }

    pub fn analysis_count(&self) -> u64 {
        self.analysis_count
    }

    pub fn has_pending_analysis(&self) -> bool {
        self.pending_generation.is_some()
    }

    /// Start a new debounce window, superseding any pending one.
    /// Returns the new generation.
    pub fn schedule_analysis(&mut self) -> u64 {
        self.generation += 1;
        self.pending_generation = Some(self.generation);
        self.generation
    }

    /// Consume the pending schedule if `generation` is the one waiting.
    /// Returns false for stale or unknown generations.
    pub fn take_due(&mut self, generation: u64) -> bool {
        if self.pending_generation == Some(generation) {
            self.pending_generation = None;
            true
        } else {
            false
        }
    }

    /// Whether a result for `generation` still describes the current text
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Reset to the empty state immediately. Invalidates any pending or
    /// in-flight analysis. Returns true if a timer was pending.
    pub fn clear_result(&mut self) -> bool {
        self.generation += 1;
        let had_pending = self.pending_generation.take().is_some();
        self.result = SentimentResult::none();
        self.confidence_animation.snap_to(0.0);
        had_pending
    }

    /// Store a fresh result and point the confidence bar at it
    pub fn apply_result(&mut self, result: SentimentResult, now: Instant) {
        self.result = result;
        self.analysis_count += 1;
        if self.settings.ui.animations {
            self.confidence_animation.retarget(result.confidence, now);
        } else {
            self.confidence_animation.snap_to(result.confidence);
        }
    }

    /// Confidence value the bar should draw right now
    pub fn displayed_confidence(&self) -> f64 {
        self.confidence_animation.displayed()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
