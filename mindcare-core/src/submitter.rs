//! Mood + reflection draft and the submission guard around it.
//!
//! The submitter is the only place that decides whether a reflection may be
//! sent. It enforces the preconditions (mood chosen, text not blank), holds
//! the in-flight ticket that stops a second concurrent submission, and turns
//! a [`SubmissionResult`] into a [`SubmitOutcome`] for the screen controller.
//!
//! Two ways to drive it:
//!
//! - [`ReflectionSubmitter::submit`] awaits the service inline.
//! - [`ReflectionSubmitter::begin_submit`] + [`ReflectionSubmitter::complete`]
//!   split the call so an event loop can hand the request to a worker and
//!   apply the result when it comes back. Results carrying a ticket that is
//!   not the one in flight are ignored.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::client::InsightService;
use crate::types::{AiInsight, Mood, SubmissionResult};

/// Callback invoked with the failure message whenever a submission fails.
pub type ErrorObserver = Arc<dyn Fn(&str) + Send + Sync>;

/// A request that has passed validation and is now in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    pub mood: Mood,
    pub text: String,
}

/// What a completed submission means for the screen controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded { reflection: String, insight: AiInsight },
    Failed { message: String },
}

#[derive(Default)]
pub struct ReflectionSubmitter {
    mood: Option<Mood>,
    text: String,
    in_flight: Option<Uuid>,
    error: Option<String>,
    observer: Option<ErrorObserver>,
}

impl ReflectionSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error_observer(observer: ErrorObserver) -> Self {
        Self { observer: Some(observer), ..Self::default() }
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message from the most recent failed submission, cleared on success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// `"You're feeling good today"` once a mood is picked.
    pub fn mood_hint(&self) -> Option<String> {
        self.mood.map(|m| format!("You're feeling {} today", m.label()))
    }

    /// Replaces the mood selection. Returns `false` (and does nothing) while a
    /// submission is in flight.
    pub fn select_mood(&mut self, mood: Mood) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.mood = Some(mood);
        true
    }

    /// Replaces the draft text. Returns `false` (and does nothing) while a
    /// submission is in flight.
    pub fn set_reflection_text(&mut self, text: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.text = text.into();
        true
    }

    /// Edits the draft in place. Same in-flight rule as `set_reflection_text`.
    pub fn edit_text(&mut self, edit: impl FnOnce(&mut String)) -> bool {
        if self.is_submitting() {
            return false;
        }
        edit(&mut self.text);
        true
    }

    pub fn can_submit(&self) -> bool {
        self.mood.is_some() && !self.text.trim().is_empty() && !self.is_submitting()
    }

    /// Validates and enters the submitting state.
    ///
    /// Returns `None` when a mood is missing, the text is blank, or another
    /// submission is already in flight. The text is carried verbatim.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        let mood = self.mood?;
        let id = Uuid::new_v4();
        self.in_flight = Some(id);
        self.error = None;
        tracing::debug!(%id, mood = mood.value(), "submission started");
        Some(Submission { id, mood, text: self.text.clone() })
    }

    /// Applies the result for ticket `id`.
    ///
    /// Returns `None` without touching any state when `id` is not the ticket
    /// currently in flight. On failure the mood and text are kept so the user
    /// can retry.
    pub fn complete(&mut self, id: Uuid, result: SubmissionResult) -> Option<SubmitOutcome> {
        if self.in_flight != Some(id) {
            tracing::debug!(%id, "ignoring result for a submission that is not in flight");
            return None;
        }
        self.in_flight = None;

        match result {
            SubmissionResult::Success { insight } => {
                self.error = None;
                Some(SubmitOutcome::Succeeded { reflection: self.text.clone(), insight })
            }
            SubmissionResult::Failure { message } => {
                self.error = Some(message.clone());
                if let Some(observer) = &self.observer {
                    observer(&message);
                }
                Some(SubmitOutcome::Failed { message })
            }
        }
    }

    /// Validates, sends through `service`, and applies the result.
    ///
    /// Returns `None` when the preconditions are not met; no request is made.
    pub async fn submit(&mut self, service: &dyn InsightService) -> Option<SubmitOutcome> {
        let submission = self.begin_submit()?;
        let result = service.send(submission.mood, &submission.text).await;
        self.complete(submission.id, result)
    }
}

impl fmt::Debug for ReflectionSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReflectionSubmitter")
            .field("mood", &self.mood)
            .field("text", &self.text)
            .field("in_flight", &self.in_flight)
            .field("error", &self.error)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmotionalIntensity;
    use std::sync::Mutex;

    fn insight() -> AiInsight {
        AiInsight {
            crisis_detected: false,
            emotion_detected: "calm".to_owned(),
            emotional_intensity: EmotionalIntensity::Low,
            supportive_message: "Good to hear.".to_owned(),
            keywords: vec![],
            possible_triggers: vec![],
            gentle_suggestions: vec![],
        }
    }

    fn ready() -> ReflectionSubmitter {
        let mut s = ReflectionSubmitter::new();
        s.select_mood(Mood::new(3).unwrap());
        s.set_reflection_text("quiet day");
        s
    }

    #[test]
    fn blank_text_cannot_submit() {
        let mut s = ReflectionSubmitter::new();
        s.select_mood(Mood::new(1).unwrap());
        s.set_reflection_text("   \n\t ");
        assert!(!s.can_submit());
        assert_eq!(s.begin_submit(), None);
    }

    #[test]
    fn missing_mood_cannot_submit() {
        let mut s = ReflectionSubmitter::new();
        s.set_reflection_text("something happened");
        assert_eq!(s.begin_submit(), None);
    }

    #[test]
    fn second_begin_is_rejected_while_in_flight() {
        let mut s = ready();
        assert!(s.begin_submit().is_some());
        assert!(s.is_submitting());
        assert_eq!(s.begin_submit(), None);
    }

    #[test]
    fn edits_are_rejected_while_in_flight() {
        let mut s = ready();
        s.begin_submit().unwrap();
        assert!(!s.select_mood(Mood::new(5).unwrap()));
        assert!(!s.set_reflection_text("changed"));
        assert!(!s.edit_text(|t| t.push('!')));
        assert_eq!(s.mood(), Mood::new(3));
        assert_eq!(s.text(), "quiet day");
    }

    #[test]
    fn text_is_submitted_verbatim() {
        let mut s = ReflectionSubmitter::new();
        s.select_mood(Mood::new(2).unwrap());
        s.set_reflection_text("  padded  ");
        let sub = s.begin_submit().unwrap();
        assert_eq!(sub.text, "  padded  ");
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut s = ready();
        let sub = s.begin_submit().unwrap();
        let outcome = s.complete(Uuid::new_v4(), SubmissionResult::failure("late"));
        assert_eq!(outcome, None);
        assert!(s.is_submitting());
        assert_eq!(s.error(), None);

        let outcome = s.complete(sub.id, SubmissionResult::Success { insight: insight() });
        assert!(matches!(outcome, Some(SubmitOutcome::Succeeded { .. })));
        assert!(!s.is_submitting());
    }

    #[test]
    fn failure_keeps_draft_and_notifies_observer() {
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let sink = Arc::clone(&seen);
        let mut s = ReflectionSubmitter::with_error_observer(Arc::new(move |msg| {
            sink.lock().unwrap().push(msg.to_owned());
        }));
        s.select_mood(Mood::new(0).unwrap());
        s.set_reflection_text("rough");

        let sub = s.begin_submit().unwrap();
        let outcome = s.complete(sub.id, SubmissionResult::failure("API request failed (500)"));

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed { message: "API request failed (500)".to_owned() })
        );
        assert_eq!(s.error(), Some("API request failed (500)"));
        assert_eq!(s.mood(), Mood::new(0));
        assert_eq!(s.text(), "rough");
        assert_eq!(*seen.lock().unwrap(), ["API request failed (500)"]);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut s = ready();
        let first = s.begin_submit().unwrap();
        s.complete(first.id, SubmissionResult::failure("offline"));
        assert_eq!(s.error(), Some("offline"));

        let second = s.begin_submit().unwrap();
        assert_eq!(s.error(), None);
        s.complete(second.id, SubmissionResult::Success { insight: insight() });
        assert_eq!(s.error(), None);
    }

    #[test]
    fn mood_hint_uses_lowercase_label() {
        let mut s = ReflectionSubmitter::new();
        assert_eq!(s.mood_hint(), None);
        s.select_mood(Mood::new(4).unwrap());
        assert_eq!(s.mood_hint().as_deref(), Some("You're feeling good today"));
    }
}
