//! Keybinding dispatcher for mindcare.
//!
//! Translates raw crossterm `KeyEvent`s into `AppState` mutations and returns a
//! `KeyAction` telling the event loop whether to continue or quit. The
//! dispatcher branches first on the overlay mode, then on the current screen,
//! so each screen's keys live in an isolated handler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use mindcare_core::ScreenKind;

use crate::app::{AppState, InputFocus, Mode};

/// Control-flow signal returned from the key dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Continue the event loop normally.
    Continue,
    /// Exit cleanly.
    Quit,
}

/// Dispatches a key event to the handler for the current mode and screen.
///
/// `Ctrl-C` quits from everywhere, including the help overlay and the text
/// editor.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::Normal => match state.screen_kind() {
            ScreenKind::Input => handle_input(key, state),
            ScreenKind::Insight | ScreenKind::Emergency => handle_result_screen(key, state),
        },
    }
}

fn open_help(state: &mut AppState) -> KeyAction {
    state.help_scroll = 0;
    state.mode = Mode::HelpOverlay;
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// Input screen
// ---------------------------------------------------------------------------

fn handle_input(key: KeyEvent, state: &mut AppState) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('s') if ctrl => {
            state.submit();
            return KeyAction::Continue;
        }
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return KeyAction::Continue;
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            return KeyAction::Continue;
        }
        _ => {}
    }

    match state.focus {
        InputFocus::Reflection => handle_editor(key, state),
        InputFocus::Mood => handle_mood_picker(key, state),
        InputFocus::Submit => handle_submit_button(key, state),
    }
}

/// Text editing. Every printable key goes into the draft, so `q` and `?`
/// are text here, not commands.
fn handle_editor(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return KeyAction::Continue;
    }
    match key.code {
        KeyCode::Esc => state.focus = InputFocus::Submit,
        KeyCode::Enter => state.type_char('\n'),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(c) => state.type_char(c),
        _ => {}
    }
    KeyAction::Continue
}

fn handle_mood_picker(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.step_mood(false),
        KeyCode::Right | KeyCode::Char('l') => state.step_mood(true),
        KeyCode::Char(c @ '0'..='5') => state.select_mood_value(c as u8 - b'0'),
        KeyCode::Enter => state.focus = InputFocus::Reflection,
        KeyCode::Char('?') => return open_help(state),
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::Continue
}

fn handle_submit_button(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.submit();
        }
        KeyCode::Char('?') => return open_help(state),
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// Insight / emergency screens
// ---------------------------------------------------------------------------

fn handle_result_screen(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc | KeyCode::Left => state.back(),
        KeyCode::Char('j') | KeyCode::Down => state.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.scroll_up(1),
        KeyCode::PageDown => state.scroll_down(10),
        KeyCode::PageUp => state.scroll_up(10),
        KeyCode::Char('g') | KeyCode::Home => state.scroll = 0,
        KeyCode::Char('?') => return open_help(state),
        KeyCode::Char('q') => return KeyAction::Quit,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// `?`, `Esc`, or `q` dismisses the overlay. `j`/`k` scroll it.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            state.help_scroll = state.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            state.mode = Mode::Normal;
        }
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Scroll wheel moves the help overlay when it is open, otherwise the
/// insight or emergency content. Other mouse events are ignored.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    let help = state.mode == Mode::HelpOverlay;
    match mouse.kind {
        MouseEventKind::ScrollUp if help => state.help_scroll = state.help_scroll.saturating_sub(3),
        MouseEventKind::ScrollDown if help => state.help_scroll = state.help_scroll.saturating_add(3),
        MouseEventKind::ScrollUp => state.scroll_up(3),
        MouseEventKind::ScrollDown => state.scroll_down(3),
        _ => {}
    }
    KeyAction::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::types::InsightResultPayload;
    use mindcare_core::{AiInsight, EmotionalIntensity, Mood, SubmissionResult};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    fn press(state: &mut AppState, code: KeyCode) -> KeyAction {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn ctrl(state: &mut AppState, c: char) -> KeyAction {
        handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), state)
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn full_keyboard_walk_submits_once() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(Default::default(), tx);

        press(&mut state, KeyCode::Char('4'));
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.focus, InputFocus::Reflection);
        type_str(&mut state, "quiet day");
        press(&mut state, KeyCode::Enter);
        type_str(&mut state, "ok");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.focus, InputFocus::Submit);
        press(&mut state, KeyCode::Enter);

        let request = rx.try_recv().unwrap();
        assert_eq!(request.mood, Mood::new(4).unwrap());
        assert_eq!(request.text, "quiet day\nok");

        // A second Enter while in flight sends nothing.
        press(&mut state, KeyCode::Enter);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn q_is_text_inside_the_editor() {
        let mut state = AppState::default();
        state.focus = InputFocus::Reflection;
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Continue);
        assert_eq!(press(&mut state, KeyCode::Char('?')), KeyAction::Continue);
        assert_eq!(state.controller.submitter().unwrap().text(), "q?");
        assert_eq!(state.mode, Mode::Normal);

        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.controller.submitter().unwrap().text(), "q");
    }

    #[test]
    fn quit_keys() {
        let mut state = AppState::default();
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Quit);
        state.focus = InputFocus::Reflection;
        assert_eq!(ctrl(&mut state, 'c'), KeyAction::Quit);
        state.mode = Mode::HelpOverlay;
        assert_eq!(ctrl(&mut state, 'c'), KeyAction::Quit);
    }

    #[test]
    fn ctrl_s_submits_from_the_editor() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(Default::default(), tx);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        type_str(&mut state, "hi");
        ctrl(&mut state, 's');
        assert_eq!(rx.try_recv().unwrap().mood, Mood::new(5).unwrap());
        assert_eq!(state.controller.submitter().unwrap().text(), "hi");
    }

    #[test]
    fn help_overlay_opens_and_closes() {
        let mut state = AppState::default();
        press(&mut state, KeyCode::Char('?'));
        assert_eq!(state.mode, Mode::HelpOverlay);
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.help_scroll, 1);
        assert_eq!(press(&mut state, KeyCode::Char('q')), KeyAction::Continue);
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn back_key_leaves_insight() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut state = AppState::new(Default::default(), tx);
        press(&mut state, KeyCode::Char('3'));
        state.type_char('x');
        state.submit();
        let request = rx.try_recv().unwrap();
        state.apply_insight_result(InsightResultPayload {
            id: request.id,
            result: SubmissionResult::Success {
                insight: AiInsight {
                    crisis_detected: false,
                    emotion_detected: "calm".to_owned(),
                    emotional_intensity: EmotionalIntensity::Low,
                    supportive_message: String::new(),
                    keywords: vec![],
                    possible_triggers: vec![],
                    gentle_suggestions: vec![],
                },
            },
        });
        assert_eq!(state.screen_kind(), ScreenKind::Insight);

        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.scroll, 1);
        press(&mut state, KeyCode::Char('b'));
        assert_eq!(state.screen_kind(), ScreenKind::Input);
        assert_eq!(state.controller.submitter().unwrap().mood(), None);
    }
}
