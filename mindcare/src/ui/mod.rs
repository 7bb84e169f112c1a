//! UI rendering module for mindcare.
//!
//! `render()` is the single entry point called by the event loop's
//! `terminal.draw()` closure. It matches exhaustively over the current
//! [`Screen`], so each screen renders exactly the data its variant carries.

pub mod emergency;
pub mod help;
pub mod input;
pub mod insight;
pub mod keybindings;
mod layout;

use mindcare_core::Screen;
use ratatui::Frame;

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, render_status_bar};

/// Renders one complete frame: the current screen, the status bar, and the
/// help overlay when it is open.
///
/// Called exactly once per `AppEvent::Render` inside `terminal.draw()`.
pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let [main, status_bar] = compute_layout(frame);

    match state.controller.screen() {
        Screen::Input(submitter) => input::render_input(frame, main, state, submitter, theme),
        Screen::Insight { insight, .. } => {
            insight::render_insight(frame, main, insight, state.scroll, theme)
        }
        Screen::Emergency { .. } => emergency::render_emergency(frame, main, state.scroll, theme),
    }

    render_status_bar(frame, status_bar, state, theme);

    // Drawn last so it sits on top.
    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, theme, state.help_scroll, state.screen_kind());
    }
}


#[cfg(test)]
mod tests {
    use super::testing::render_to_string;
    use crate::app::{AppState, Mode};

    #[test]
    fn help_overlay_draws_over_input() {
        let mut state = AppState::default();
        state.mode = Mode::HelpOverlay;
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Ctrl-S"));
        assert!(screen.contains("REFLECT"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let state = AppState::default();
        render_to_string(&state, 10, 4);
    }
}
