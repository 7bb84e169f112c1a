//! Messages exchanged with the insight worker.
//!
//! Both directions are fully owned so they can move between the UI loop and
//! the worker task.

use mindcare_core::types::{Mood, SubmissionResult};
use mindcare_core::Submission;
use uuid::Uuid;

/// One `/reflect` call requested by the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRequest {
    /// Submission ticket; echoed back in the result.
    pub id: Uuid,
    pub mood: Mood,
    pub text: String,
}

impl From<Submission> for InsightRequest {
    fn from(s: Submission) -> Self {
        Self { id: s.id, mood: s.mood, text: s.text }
    }
}

/// Worker → UI: the outcome for ticket `id`.
///
/// Carried inside `AppEvent::InsightResult(Box<InsightResultPayload>)`;
/// the box keeps the event enum small since an insight can be large.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightResultPayload {
    pub id: Uuid,
    pub result: SubmissionResult,
}
