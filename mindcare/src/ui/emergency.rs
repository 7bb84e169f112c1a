//! Emergency support screen. Shown instead of the insight whenever the
//! backend flags a crisis. The content is fixed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize as _},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
};

use crate::theme::Theme;
use crate::ui::layout::panel_block;

/// `(title, description, footer)` for each secondary resource.
const RESOURCES: [(&str, &str, &str); 3] = [
    (
        "Text Support",
        "Crisis Text Line - Text HOME to 741741",
        "Free, 24/7 support via text message",
    ),
    (
        "5-4-3-2-1 Grounding",
        "Quick exercise to calm your mind",
        "5 see • 4 touch • 3 hear • 2 smell • 1 taste",
    ),
    (
        "Reach Out to a Friend",
        "Talk to someone you trust",
        "Sometimes just talking helps more than you think",
    ),
];

pub fn render_emergency(frame: &mut Frame, area: Rect, scroll: u16, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(build_emergency_text(theme))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(panel_block(" Support  b back ", true, theme)),
        area,
    );
}

pub fn build_emergency_text(theme: &Theme) -> Text<'static> {
    let support = Style::default().fg(theme.support);
    let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from("You Are Not Alone").style(heading).centered(),
        Line::from("Help is available, and people care about you.").fg(theme.text).centered(),
        Line::from("Reaching out is a sign of strength.").fg(theme.text).centered(),
        Line::default(),
        Line::from("📞 988 Suicide & Crisis Lifeline: call or text 988")
            .style(support.add_modifier(Modifier::BOLD))
            .centered(),
        Line::from("Available 24/7 for anyone in emotional distress or suicidal crisis")
            .fg(theme.muted)
            .centered(),
        Line::default(),
        Line::from("Other Ways to Get Support").style(heading).centered(),
        Line::default(),
    ];

    for (title, description, footer) in RESOURCES {
        lines.push(Line::from(title).style(support.add_modifier(Modifier::BOLD)));
        lines.push(Line::from(format!("  {description}")).fg(theme.text));
        lines.push(Line::from(format!("  {footer}")).fg(theme.muted));
        lines.push(Line::default());
    }

    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::plain;

    #[test]
    fn lists_every_resource() {
        let text = plain(&build_emergency_text(&Theme::dark()));
        assert!(text.contains("You Are Not Alone"));
        assert!(text.contains("call or text 988"));
        assert!(text.contains("Text HOME to 741741"));
        assert!(text.contains("5-4-3-2-1 Grounding"));
        assert!(text.contains("Reach Out to a Friend"));
    }
}
