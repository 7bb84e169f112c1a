//! Help overlay renderer for mindcare.
//!
//! Draws a centred modal over the current screen, using `Clear` to erase the
//! background first. The key list shown depends on the screen underneath.

use mindcare_core::ScreenKind;
use ratatui::{
    Frame,
    layout::Constraint,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay on top of whatever screen is showing.
///
/// Skipped on terminals narrower than 40 columns, where the overlay would
/// collapse to nothing useful.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16, kind: ScreenKind) {
    if frame.area().width < 40 {
        return;
    }

    let overlay_area = frame.area().centered(Constraint::Percentage(80), Constraint::Percentage(80));
    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help · j/k scroll, ? or Esc to dismiss ")
        .border_style(Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text(kind, theme))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

fn build_help_text(kind: ScreenKind, theme: &Theme) -> Text<'static> {
    let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    match kind {
        ScreenKind::Input => {
            lines.push(Line::styled("Reflect", heading));
            lines.push(Line::from("  Tab / Shift-Tab   Move between mood, reflection and submit"));
            lines.push(Line::from("  ← / → , h / l     Pick a mood (mood focused)"));
            lines.push(Line::from("  0 - 5             Pick a mood directly (mood focused)"));
            lines.push(Line::from("  typing            Write your reflection (reflection focused)"));
            lines.push(Line::from("  Enter             New line in the reflection"));
            lines.push(Line::from("  Esc               Leave the reflection, focus submit"));
            lines.push(Line::from("  Enter on submit   Reflect with AI"));
            lines.push(Line::from("  Ctrl-S            Reflect with AI from anywhere"));
        }
        ScreenKind::Insight | ScreenKind::Emergency => {
            lines.push(Line::styled(kind.title(), heading));
            lines.push(Line::from("  b / Backspace / ← Back to a fresh reflection"));
            lines.push(Line::from("  Esc               Back to a fresh reflection"));
            lines.push(Line::from("  j / k             Scroll down / up"));
            lines.push(Line::from("  g                 Jump to top"));
        }
    }

    lines.push(Line::default());
    lines.push(Line::styled("General", heading));
    lines.push(Line::from("  ?                 Open / close this help"));
    if kind == ScreenKind::Input {
        lines.push(Line::from("  q / Esc           Quit (outside the reflection)"));
    } else {
        lines.push(Line::from("  q                 Quit"));
    }
    lines.push(Line::from("  Ctrl-C            Quit from anywhere"));

    Text::from(lines)
}
