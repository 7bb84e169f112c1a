//! Insight screen: the backend's reading of one reflection.
//!
//! Every field is shown exactly as received. Trigger and suggestion sections
//! appear only when the backend sent at least one entry.

use mindcare_core::AiInsight;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize as _},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::theme::Theme;
use crate::ui::layout::panel_block;

pub const TRIGGERS_HEADING: &str = "Possible Triggers";
pub const SUGGESTIONS_HEADING: &str = "Gentle Suggestions";
pub const DISCLAIMER: &str = "💜 MindCare AI provides emotional support, not medical advice.";

pub fn render_insight(frame: &mut Frame, area: Rect, insight: &AiInsight, scroll: u16, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(build_insight_text(insight, theme))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(panel_block(" Insight  b back · j/k scroll ", true, theme)),
        area,
    );
}

pub fn build_insight_text(insight: &AiInsight, theme: &Theme) -> Text<'static> {
    let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from("✨ MindCare AI").fg(theme.accent).centered(),
        Line::from("Your Emotional Insight").style(heading).centered(),
        Line::from("Here's what we've learned from your reflection").fg(theme.muted).centered(),
        Line::default(),
    ];

    // The screen controller sends crisis payloads to the emergency screen,
    // so this banner only shows when the builder is handed one directly.
    if insight.crisis_detected {
        let support = Style::default().fg(theme.support);
        lines.push(Line::from("We're Here for You").style(support.add_modifier(Modifier::BOLD)));
        lines.push(Line::from("It sounds like you're going through a difficult time.").style(support));
        lines.push(Line::from(vec![
            Span::styled("Crisis support available 24/7: ", support),
            Span::styled("Call or text 988", support.add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::default());
    }

    let intensity = &insight.emotional_intensity;
    lines.push(Line::from("Emotion Detected").fg(theme.muted));
    lines.push(Line::from(vec![
        Span::styled(
            insight.emotion_detected.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} intensity ", intensity.as_str()),
            Style::default().fg(theme.intensity(intensity)).add_modifier(Modifier::REVERSED),
        ),
    ]));
    lines.push(Line::default());

    lines.extend(
        Text::from(insight.supportive_message.clone()).lines.into_iter().map(|l| l.fg(theme.text)),
    );
    lines.push(Line::default());

    if !insight.keywords.is_empty() {
        let mut chips = Vec::with_capacity(insight.keywords.len() * 2);
        for keyword in &insight.keywords {
            chips.push(Span::styled(format!("#{keyword}"), Style::default().fg(theme.keyword)));
            chips.push(Span::raw("  "));
        }
        lines.push(Line::from(chips));
        lines.push(Line::default());
    }

    if !insight.possible_triggers.is_empty() {
        lines.push(Line::from(TRIGGERS_HEADING).style(heading));
        for trigger in &insight.possible_triggers {
            lines.push(Line::from(format!("  • {trigger}")).fg(theme.text));
        }
        lines.push(Line::default());
    }

    if !insight.gentle_suggestions.is_empty() {
        lines.push(Line::from(SUGGESTIONS_HEADING).style(heading));
        for (i, suggestion) in insight.gentle_suggestions.iter().enumerate() {
            lines.push(Line::from(format!("  {}. {suggestion}", i + 1)).fg(theme.text));
        }
        lines.push(Line::default());
    }

    lines.push(Line::from(DISCLAIMER).fg(theme.muted).centered());
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::insight::types::InsightResultPayload;
    use crate::ui::testing::{plain, render_to_string};
    use mindcare_core::{EmotionalIntensity, SubmissionResult};
    use tokio::sync::mpsc;

    fn joy() -> AiInsight {
        AiInsight {
            crisis_detected: false,
            emotion_detected: "joy".to_owned(),
            emotional_intensity: EmotionalIntensity::Medium,
            supportive_message: "It sounds like the walk did you good.".to_owned(),
            keywords: vec!["walk".to_owned(), "outside".to_owned()],
            possible_triggers: vec![],
            gentle_suggestions: vec![],
        }
    }

    #[test]
    fn empty_lists_hide_their_sections() {
        let text = plain(&build_insight_text(&joy(), &Theme::dark()));
        assert!(text.contains("joy"));
        assert!(text.contains("medium intensity"));
        assert!(text.contains("#walk"));
        assert!(!text.contains(TRIGGERS_HEADING));
        assert!(!text.contains(SUGGESTIONS_HEADING));
        assert!(!text.contains("We're Here for You"));
        assert!(text.contains(DISCLAIMER));
    }

    #[test]
    fn suggestions_are_numbered_in_order() {
        let insight = AiInsight {
            possible_triggers: vec!["deadline".to_owned()],
            gentle_suggestions: vec!["Take a short break".to_owned(), "Drink water".to_owned()],
            ..joy()
        };
        let text = plain(&build_insight_text(&insight, &Theme::dark()));
        assert!(text.contains(TRIGGERS_HEADING));
        assert!(text.contains("• deadline"));
        assert!(text.contains("1. Take a short break"));
        assert!(text.contains("2. Drink water"));
    }

    #[test]
    fn crisis_flag_adds_banner_and_unknown_intensity_passes_through() {
        let insight = AiInsight {
            crisis_detected: true,
            emotional_intensity: EmotionalIntensity::Other("overwhelming".to_owned()),
            ..joy()
        };
        let text = plain(&build_insight_text(&insight, &Theme::dark()));
        assert!(text.contains("We're Here for You"));
        assert!(text.contains("Call or text 988"));
        assert!(text.contains("overwhelming intensity"));
    }

    #[test]
    fn good_walk_renders_on_insight_screen() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(Default::default(), tx);
        state.select_mood_value(4);
        for c in "Had a great walk today".chars() {
            state.type_char(c);
        }
        state.submit();
        let request = rx.try_recv().unwrap();
        state.apply_insight_result(InsightResultPayload {
            id: request.id,
            result: SubmissionResult::Success { insight: joy() },
        });

        let screen = render_to_string(&state, 90, 30);
        assert!(screen.contains("Your Emotional Insight"));
        assert!(screen.contains("joy"));
        assert!(!screen.contains(TRIGGERS_HEADING));
        assert!(!screen.contains(SUGGESTIONS_HEADING));
        assert!(screen.contains("INSIGHT"));
    }
}
