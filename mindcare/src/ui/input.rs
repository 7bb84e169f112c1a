//! Mood + reflection input screen.
//!
//! Layout, top to bottom: heading, mood picker, reflection editor, inline
//! error, submit control, privacy footer. The submitter passed in is the one
//! owned by `Screen::Input`; nothing here mutates it.

use mindcare_core::ReflectionSubmitter;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize as _},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::app::{picker_order, AppState, InputFocus};
use crate::theme::Theme;
use crate::ui::layout::{panel_block, spinner_glyph};

const PLACEHOLDER: &str = "I feel this way because...";

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Processing with AI..." } else { "Reflect with AI" }
}

pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    submitter: &ReflectionSubmitter,
    theme: &Theme,
) {
    let [heading, picker, editor, error, button, footer] = area.layout(&Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ]));

    frame.render_widget(
        Paragraph::new(vec![
            Line::from("How are you feeling today?").bold().fg(theme.accent),
            Line::from("Select your mood and share what's on your mind").fg(theme.muted),
        ])
        .centered(),
        heading,
    );

    render_mood_picker(frame, picker, state.focus == InputFocus::Mood, submitter, theme);
    render_editor(frame, editor, state.focus == InputFocus::Reflection, submitter, theme);

    if let Some(message) = submitter.error() {
        frame.render_widget(
            Paragraph::new(Line::from(message.to_owned()).fg(theme.error)).centered(),
            error,
        );
    }

    render_submit(frame, button, state, submitter, theme);

    frame.render_widget(
        Paragraph::new(
            Line::from("Your thoughts are processed privately and securely").fg(theme.muted),
        )
        .centered(),
        footer,
    );
}

fn render_mood_picker(
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    submitter: &ReflectionSubmitter,
    theme: &Theme,
) {
    let selected = submitter.mood();
    let mut spans = Vec::with_capacity(12);
    for mood in picker_order() {
        let label = format!(" {} {} ", mood.glyph(), mood.display_name());
        let style = if selected == Some(mood) {
            Style::default().fg(theme.mood_selected).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .centered()
            .block(panel_block(" Mood  ←/→ or 0-5 ", focused, theme)),
        area,
    );
}

fn render_editor(
    frame: &mut Frame,
    area: Rect,
    focused: bool,
    submitter: &ReflectionSubmitter,
    theme: &Theme,
) {
    let mut lines = Vec::new();
    if let Some(hint) = submitter.mood_hint() {
        lines.push(Line::from(hint).fg(theme.muted).italic());
    }

    if submitter.text().is_empty() {
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::raw(cursor),
            Span::styled(PLACEHOLDER, Style::default().fg(theme.muted)),
        ]));
    } else {
        let body = if focused && !submitter.is_submitting() {
            format!("{}▏", submitter.text())
        } else {
            submitter.text().to_owned()
        };
        lines.extend(Text::from(body).lines.into_iter().map(|l| l.fg(theme.text)));
    }

    // Keep the end of a long draft in view, counting wrapped rows.
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_height = area.height.saturating_sub(2);
    let rows = paragraph.line_count(area.width.saturating_sub(2));
    let overflow = u16::try_from(rows).unwrap_or(u16::MAX).saturating_sub(inner_height);

    frame.render_widget(
        paragraph
            .scroll((overflow, 0))
            .block(panel_block(" What made you feel this way today? ", focused, theme)),
        area,
    );
}

fn render_submit(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    submitter: &ReflectionSubmitter,
    theme: &Theme,
) {
    let submitting = submitter.is_submitting();
    let label = if submitting {
        format!("{} {}", spinner_glyph(state.spinner_frame), submit_label(true))
    } else {
        format!("✨ {}", submit_label(false))
    };
    let color = if submitter.can_submit() || submitting {
        theme.button_enabled
    } else {
        theme.button_disabled
    };

    let [_, button, _] = area.layout(&Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(30),
        Constraint::Fill(1),
    ]));
    frame.render_widget(
        Paragraph::new(Line::from(label).fg(color).bold())
            .centered()
            .block(panel_block("", state.focus == InputFocus::Submit, theme)),
        button,
    );
}
