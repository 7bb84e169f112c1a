//! Wire and domain types shared by the client, the submitter, and the screens.
//!
//! Everything here is fully owned so values can cross from the insight worker
//! task to the UI loop without borrowing.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A mood level in `0..=5`, lowest (`struggling`) to highest (`great`).
///
/// Serialized as the bare integer, which is what `POST /reflect` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Mood(u8);

const MOOD_LABELS: [&str; 6] = ["struggling", "sad", "low", "okay", "good", "great"];
const MOOD_NAMES: [&str; 6] = ["Struggling", "Sad", "Low", "Okay", "Good", "Great"];
const MOOD_GLYPHS: [&str; 6] = ["😣", "😢", "😔", "😐", "🙂", "😄"];

impl Mood {
    pub const MAX: u8 = 5;

    /// All six moods in ascending order.
    pub const ALL: [Mood; 6] = [Mood(0), Mood(1), Mood(2), Mood(3), Mood(4), Mood(5)];

    /// Returns `None` when `value` is outside `0..=5`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Lowercase label, e.g. `"good"`.
    pub fn label(self) -> &'static str {
        MOOD_LABELS[self.0 as usize]
    }

    /// Capitalized name shown under the glyph in the picker, e.g. `"Good"`.
    pub fn display_name(self) -> &'static str {
        MOOD_NAMES[self.0 as usize]
    }

    pub fn glyph(self) -> &'static str {
        MOOD_GLYPHS[self.0 as usize]
    }

    /// Next mood up, saturating at `great`.
    pub fn brighter(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// Next mood down, saturating at `struggling`.
    pub fn dimmer(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl TryFrom<u8> for Mood {
    type Error = InvalidMood;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mood::new(value).ok_or(InvalidMood(value))
    }
}

impl From<Mood> for u8 {
    fn from(mood: Mood) -> Self {
        mood.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected mood value (outside `0..=5`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("mood must be between 0 and 5, got {0}")]
pub struct InvalidMood(pub u8);

/// Intensity reported by the backend.
///
/// The backend promises one of `low`, `medium`, `high`. Anything else is kept
/// verbatim in `Other` and displayed as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmotionalIntensity {
    Low,
    Medium,
    High,
    Other(String),
}

impl EmotionalIntensity {
    pub fn as_str(&self) -> &str {
        match self {
            EmotionalIntensity::Low => "low",
            EmotionalIntensity::Medium => "medium",
            EmotionalIntensity::High => "high",
            EmotionalIntensity::Other(raw) => raw,
        }
    }
}

impl fmt::Display for EmotionalIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EmotionalIntensity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmotionalIntensity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "low" => EmotionalIntensity::Low,
            "medium" => EmotionalIntensity::Medium,
            "high" => EmotionalIntensity::High,
            _ => EmotionalIntensity::Other(raw),
        })
    }
}

/// Insight payload returned by `POST /reflect`.
///
/// Treated as opaque display data: the client never recomputes or
/// normalizes any field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub crisis_detected: bool,
    pub emotion_detected: String,
    pub emotional_intensity: EmotionalIntensity,
    pub supportive_message: String,
    pub keywords: Vec<String>,
    pub possible_triggers: Vec<String>,
    pub gentle_suggestions: Vec<String>,
}

/// Request body for `POST /reflect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionRequest<'a> {
    pub mood: Mood,
    pub text: &'a str,
}

/// Outcome of one call to the insight service. Exactly one side is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success { insight: AiInsight },
    Failure { message: String },
}

impl SubmissionResult {
    pub fn failure(message: impl Into<String>) -> Self {
        SubmissionResult::Failure { message: message.into() }
    }
}

impl<E: fmt::Display> From<Result<AiInsight, E>> for SubmissionResult {
    fn from(result: Result<AiInsight, E>) -> Self {
        match result {
            Ok(insight) => SubmissionResult::Success { insight },
            Err(e) => SubmissionResult::Failure { message: e.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mood_range_is_enforced() {
        assert!(Mood::new(0).is_some());
        assert!(Mood::new(5).is_some());
        assert_eq!(Mood::new(6), None);
        assert_eq!(Mood::try_from(9), Err(InvalidMood(9)));
    }

    #[test]
    fn mood_labels_follow_scale() {
        let labels: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["struggling", "sad", "low", "okay", "good", "great"]);
        assert_eq!(Mood::ALL[4].display_name(), "Good");
        assert_eq!(Mood::ALL[5].brighter(), Mood::ALL[5]);
        assert_eq!(Mood::ALL[0].dimmer(), Mood::ALL[0]);
    }

    #[test]
    fn request_body_uses_plain_integer_mood() {
        let body = ReflectionRequest { mood: Mood::ALL[3], text: "fine" };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "mood": 3, "text": "fine" }));
    }

    #[test]
    fn insight_parses_camel_case_payload() {
        let raw = r#"{
            "crisisDetected": false,
            "emotionDetected": "joy",
            "emotionalIntensity": "medium",
            "supportiveMessage": "Nice.",
            "keywords": ["walk", "sun"],
            "possibleTriggers": [],
            "gentleSuggestions": ["Keep walking"]
        }"#;
        let insight: AiInsight = serde_json::from_str(raw).unwrap();
        assert_eq!(insight.emotion_detected, "joy");
        assert_eq!(insight.emotional_intensity, EmotionalIntensity::Medium);
        assert_eq!(insight.keywords, ["walk", "sun"]);
    }

    #[test]
    fn unexpected_intensity_passes_through() {
        let intensity: EmotionalIntensity = serde_json::from_str("\"overwhelming\"").unwrap();
        assert_eq!(intensity, EmotionalIntensity::Other("overwhelming".to_owned()));
        assert_eq!(intensity.to_string(), "overwhelming");
    }
}
