//! Frame layout and shared chrome for mindcare.
//!
//! Pure layout arithmetic plus the two pieces every screen shares: the
//! bordered panel block and the 1-row status bar. Called inside
//! `terminal.draw()` on every render, so each frame reflects the live
//! terminal size.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::AppState;
use crate::theme::Theme;

const MAX_WIDTH: u16 = 100;

/// Braille spinner frames advanced by `AppState::tick`.
pub const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Returns `[main, status_bar]` for the current frame.
///
/// On wide terminals the main area is capped at 100 columns and centred so
/// long reflections stay readable.
pub fn compute_layout(frame: &Frame) -> [Rect; 2] {
    let [body, status_bar] =
        frame.area().layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]));
    let width = body.width.min(MAX_WIDTH);
    let main = Rect { x: body.x + (body.width - width) / 2, width, ..body };
    [main, status_bar]
}

/// Builds a bordered `Block`. Focused panels get a thick border in the
/// active color.
pub fn panel_block<'a>(title: &'a str, is_focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if is_focused {
        Style::default().fg(theme.border_active)
    } else {
        Style::default().fg(theme.border_inactive)
    };
    let border_type = if is_focused { BorderType::Thick } else { BorderType::Rounded };

    Block::bordered().title(title).border_type(border_type).border_style(border_style)
}

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// Renders the 1-row status bar: screen name, a busy indicator while a
/// submission is in flight, and a short key hint on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let kind = state.screen_kind();
    let mut spans = vec![Span::styled(
        format!(" {} ", kind.title().to_uppercase()),
        Style::default().fg(theme.status_screen).add_modifier(Modifier::BOLD),
    )];

    if state.is_submitting() {
        spans.push(Span::styled(
            format!(" {} sending reflection ", spinner_glyph(state.spinner_frame)),
            Style::default().fg(theme.status_busy),
        ));
    }

    let hint = " ? help  Ctrl-C quit ";
    let [left, right] = area.layout(&Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(hint.len() as u16),
    ]));

    let bar_style = Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg);
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), left);
    frame.render_widget(Paragraph::new(hint).style(bar_style), right);
}
