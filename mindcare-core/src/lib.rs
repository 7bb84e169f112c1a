//! Core of the MindCare reflection client.
//!
//! A user picks a [`Mood`], writes a reflection, and the
//! [`ReflectionSubmitter`] sends both to the insight backend through an
//! [`InsightService`]. The returned [`AiInsight`] decides which screen the
//! [`ScreenController`] shows next. Nothing here touches the terminal.

pub mod client;
pub mod config;
pub mod screen;
pub mod submitter;
pub mod types;

pub use client::{InsightService, RemoteInsightClient};
pub use screen::{ApplyOutcome, Screen, ScreenController, ScreenKind};
pub use submitter::{ReflectionSubmitter, Submission, SubmitOutcome};
pub use types::{AiInsight, EmotionalIntensity, Mood, SubmissionResult};
