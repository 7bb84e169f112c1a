//! Central application state for mindcare.
//!
//! `AppState` owns the [`ScreenController`] (and through it the live
//! submitter) plus the purely visual state: focus on the input screen, scroll
//! offsets, overlay mode. No ratatui rendering logic lives here. The render
//! module reads this state and the keybinding dispatcher mutates it.

use mindcare_core::client::UNKNOWN_FAILURE_MESSAGE;
use mindcare_core::screen::{ApplyOutcome, ScreenController, ScreenKind};
use mindcare_core::types::{Mood, SubmissionResult};
use tokio::sync::mpsc::UnboundedSender;

use crate::insight::types::{InsightRequest, InsightResultPayload};

/// Overlay mode. The default is `Normal`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Full-screen help overlay is shown above the current screen.
    HelpOverlay,
}

/// Which control on the input screen receives keys.
///
/// Cycle order: `Mood` → `Reflection` → `Submit` → `Mood`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    #[default]
    Mood,
    Reflection,
    Submit,
}

impl InputFocus {
    pub fn next(self) -> Self {
        match self {
            InputFocus::Mood => InputFocus::Reflection,
            InputFocus::Reflection => InputFocus::Submit,
            InputFocus::Submit => InputFocus::Mood,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            InputFocus::Mood => InputFocus::Submit,
            InputFocus::Reflection => InputFocus::Mood,
            InputFocus::Submit => InputFocus::Reflection,
        }
    }
}

/// Moods in picker order, left to right (happiest first).
pub fn picker_order() -> [Mood; 6] {
    let mut moods = Mood::ALL;
    moods.reverse();
    moods
}

pub struct AppState {
    pub controller: ScreenController,
    pub mode: Mode,
    pub focus: InputFocus,

    /// Vertical scroll offset for the insight and emergency screens.
    pub scroll: u16,
    pub help_scroll: u16,

    /// Advances on every tick while a submission is in flight.
    pub spinner_frame: usize,

    /// Send half of the insight worker's request channel. `None` in tests that
    /// only exercise local state.
    pub request_tx: Option<UnboundedSender<InsightRequest>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            controller: ScreenController::new(),
            mode: Mode::default(),
            focus: InputFocus::default(),
            scroll: 0,
            help_scroll: 0,
            spinner_frame: 0,
            request_tx: None,
        }
    }
}

impl AppState {
    pub fn new(controller: ScreenController, request_tx: UnboundedSender<InsightRequest>) -> Self {
        Self { controller, request_tx: Some(request_tx), ..Self::default() }
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.controller.kind()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.submitter().is_some_and(|s| s.is_submitting())
    }

    /// Picks mood `value` (0..=5). Out-of-range digits are ignored.
    pub fn select_mood_value(&mut self, value: u8) {
        if let (Some(mood), Some(submitter)) = (Mood::new(value), self.controller.submitter_mut())
        {
            submitter.select_mood(mood);
        }
    }

    /// Moves the mood selection one slot left or right in picker order.
    ///
    /// With nothing selected yet, `Right` picks the leftmost mood and `Left`
    /// the rightmost.
    pub fn step_mood(&mut self, rightwards: bool) {
        let Some(submitter) = self.controller.submitter_mut() else {
            return;
        };
        // Picker runs happiest → lowest, so moving right dims the mood.
        let next = match (submitter.mood(), rightwards) {
            (Some(m), true) => m.dimmer(),
            (Some(m), false) => m.brighter(),
            (None, true) => picker_order()[0],
            (None, false) => picker_order()[5],
        };
        submitter.select_mood(next);
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(submitter) = self.controller.submitter_mut() {
            submitter.edit_text(|t| t.push(c));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(submitter) = self.controller.submitter_mut() {
            submitter.edit_text(|t| {
                t.pop();
            });
        }
    }

    /// Starts a submission and hands it to the insight worker.
    ///
    /// Returns `false` when the submitter's preconditions are not met. If the
    /// worker is gone the submission fails immediately rather than leaving
    /// the screen stuck in the submitting state.
    pub fn submit(&mut self) -> bool {
        let Some(submission) = self.controller.submitter_mut().and_then(|s| s.begin_submit())
        else {
            return false;
        };
        let id = submission.id;
        self.spinner_frame = 0;

        let sent = match &self.request_tx {
            Some(tx) => tx.send(InsightRequest::from(submission)).is_ok(),
            None => false,
        };
        if !sent {
            tracing::error!(%id, "insight worker unavailable");
            self.controller.apply_result(id, SubmissionResult::failure(UNKNOWN_FAILURE_MESSAGE));
        }
        true
    }

    /// Applies a result from the insight worker. Results for tickets that are
    /// no longer in flight are dropped.
    pub fn apply_insight_result(&mut self, payload: InsightResultPayload) -> ApplyOutcome {
        let outcome = self.controller.apply_result(payload.id, payload.result);
        match &outcome {
            ApplyOutcome::Transitioned(kind) => {
                tracing::info!(screen = kind.title(), "screen changed");
                self.scroll = 0;
            }
            ApplyOutcome::Failed(message) => {
                tracing::info!(%message, "submission failed, staying on input");
                self.focus = InputFocus::Submit;
            }
            ApplyOutcome::Ignored => {
                tracing::debug!(id = %payload.id, "stale insight result dropped");
            }
        }
        outcome
    }

    /// Back navigation from the insight or emergency screen.
    pub fn back(&mut self) {
        self.controller.back();
        self.focus = InputFocus::default();
        self.scroll = 0;
    }

    pub fn tick(&mut self) {
        if self.is_submitting() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}
