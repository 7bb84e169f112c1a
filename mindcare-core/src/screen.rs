//! Top-level screen state.
//!
//! [`Screen`] is a tagged union whose variants carry exactly the data their
//! view needs: the input screen owns the live [`ReflectionSubmitter`], the
//! insight and emergency screens own the submitted text and the returned
//! insight. Leaving the input screen drops its submitter, so a result that
//! arrives afterwards has nothing to apply to and is ignored.

use uuid::Uuid;

use crate::client::InsightService;
use crate::submitter::{ErrorObserver, ReflectionSubmitter, SubmitOutcome};
use crate::types::{AiInsight, SubmissionResult};

/// Payload-free discriminant of [`Screen`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    #[default]
    Input,
    Insight,
    Emergency,
}

impl ScreenKind {
    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::Input => "Reflect",
            ScreenKind::Insight => "Insight",
            ScreenKind::Emergency => "Support",
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    Input(ReflectionSubmitter),
    Insight { reflection: String, insight: AiInsight },
    /// `insight.crisis_detected` is always `true` here.
    Emergency { reflection: String, insight: AiInsight },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Input(_) => ScreenKind::Input,
            Screen::Insight { .. } => ScreenKind::Insight,
            Screen::Emergency { .. } => ScreenKind::Emergency,
        }
    }
}

/// Result of routing a submission result through the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Moved to the insight or emergency screen.
    Transitioned(ScreenKind),
    /// Stayed on the input screen with this error message.
    Failed(String),
    /// Not the in-flight ticket, or the input screen is no longer showing.
    Ignored,
}

pub struct ScreenController {
    screen: Screen,
    observer: Option<ErrorObserver>,
}

impl std::fmt::Debug for ScreenController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenController")
            .field("screen", &self.screen)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self { screen: Screen::Input(ReflectionSubmitter::new()), observer: None }
    }

    /// Every submitter this controller creates will report failures to `observer`.
    pub fn with_error_observer(observer: ErrorObserver) -> Self {
        Self {
            screen: Screen::Input(ReflectionSubmitter::with_error_observer(observer.clone())),
            observer: Some(observer),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Submitted text carried by the insight/emergency screens; `""` on input.
    pub fn last_reflection_text(&self) -> &str {
        match &self.screen {
            Screen::Input(_) => "",
            Screen::Insight { reflection, .. } | Screen::Emergency { reflection, .. } => {
                reflection
            }
        }
    }

    pub fn last_insight(&self) -> Option<&AiInsight> {
        match &self.screen {
            Screen::Input(_) => None,
            Screen::Insight { insight, .. } | Screen::Emergency { insight, .. } => Some(insight),
        }
    }

    pub fn submitter(&self) -> Option<&ReflectionSubmitter> {
        match &self.screen {
            Screen::Input(submitter) => Some(submitter),
            _ => None,
        }
    }

    pub fn submitter_mut(&mut self) -> Option<&mut ReflectionSubmitter> {
        match &mut self.screen {
            Screen::Input(submitter) => Some(submitter),
            _ => None,
        }
    }

    /// Routes a successful submission to the insight or emergency screen.
    ///
    /// Ignored unless the input screen is showing.
    pub fn on_success(&mut self, reflection: String, insight: AiInsight) -> Option<ScreenKind> {
        if !matches!(self.screen, Screen::Input(_)) {
            return None;
        }
        self.screen = if insight.crisis_detected {
            tracing::info!("crisis flagged by backend, showing support screen");
            Screen::Emergency { reflection, insight }
        } else {
            Screen::Insight { reflection, insight }
        };
        Some(self.kind())
    }

    /// Returns to a fresh input screen, dropping the carried text and insight.
    ///
    /// No-op on the input screen.
    pub fn back(&mut self) {
        if matches!(self.screen, Screen::Input(_)) {
            return;
        }
        let submitter = match &self.observer {
            Some(observer) => ReflectionSubmitter::with_error_observer(observer.clone()),
            None => ReflectionSubmitter::new(),
        };
        self.screen = Screen::Input(submitter);
    }

    /// Applies the result for ticket `id` to the current submitter.
    pub fn apply_result(&mut self, id: Uuid, result: SubmissionResult) -> ApplyOutcome {
        let Some(submitter) = self.submitter_mut() else {
            tracing::debug!(%id, "result arrived after leaving the input screen");
            return ApplyOutcome::Ignored;
        };
        match submitter.complete(id, result) {
            Some(outcome) => self.apply_outcome(outcome),
            None => ApplyOutcome::Ignored,
        }
    }

    /// Drives the current submitter through `service` and applies the outcome.
    ///
    /// Returns `None` when not on the input screen or when the submitter's
    /// preconditions are not met (no request is sent in either case).
    pub async fn submit(&mut self, service: &dyn InsightService) -> Option<ApplyOutcome> {
        let outcome = self.submitter_mut()?.submit(service).await?;
        Some(self.apply_outcome(outcome))
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) -> ApplyOutcome {
        match outcome {
            SubmitOutcome::Succeeded { reflection, insight } => {
                match self.on_success(reflection, insight) {
                    Some(kind) => ApplyOutcome::Transitioned(kind),
                    None => ApplyOutcome::Ignored,
                }
            }
            SubmitOutcome::Failed { message } => ApplyOutcome::Failed(message),
        }
    }
}
