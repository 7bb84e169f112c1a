//! mindcare: mood journaling with AI reflections, in the terminal.
//!
//! Entry point for the `mindcare` binary. Wires together the terminal
//! lifecycle (`tui`), the unified event bus (`event`), the insight worker
//! (`insight`), rendering (`ui`), and the theme system (`theme`).
//!
//! # Startup sequence
//!
//! 1. File logging into the config directory, then settings and theme. All
//!    read-only with respect to the terminal.
//! 2. `install_panic_hook()` so a panic restores the terminal first.
//! 3. `register_sigterm()` returns a flag polled in the event loop.
//! 4. `init_tui()` enters the alternate screen and raw mode.
//! 5. Spawn the event task and the insight worker.
//!
//! `restore_tui()` runs once after the loop exits, whatever the reason
//! (quit key, SIGTERM, channel close, draw error).

mod app;
mod event;
mod insight;
mod logging;
mod theme;
mod tui;
mod ui;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use mindcare_core::config::{self, Settings};
use mindcare_core::{RemoteInsightClient, ScreenController};
use tokio::sync::mpsc;

use crate::event::AppEvent;
use crate::ui::keybindings::{handle_key, handle_mouse, KeyAction};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _log_guard = logging::init_logging(&config::config_dir())?;
    let settings = Settings::load();
    tracing::info!(theme = %settings.theme, "starting mindcare");
    let theme = theme::Theme::from_name(&settings.theme);

    tui::install_panic_hook();
    let term_flag = tui::register_sigterm()?;
    let mut terminal = tui::init_tui()?;

    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let service = Arc::new(RemoteInsightClient::new(settings.base_url.clone()));
    tracing::info!(base_url = service.base_url(), "insight backend");
    tokio::spawn(insight::worker::insight_worker_loop(service, request_rx, handler.tx.clone()));

    let controller = ScreenController::with_error_observer(Arc::new(|message: &str| {
        tracing::warn!(%message, "reflection submission failed");
    }));
    let mut state = app::AppState::new(controller, request_tx);

    // Exits only via `break` so `restore_tui()` below is always reached.
    let mut outcome = Ok(());
    'event_loop: loop {
        tokio::select! {
            // Heartbeat: SIGTERM is checked at least every 50ms even when the
            // channel is quiet.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    tracing::info!("SIGTERM received");
                    break 'event_loop;
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(AppEvent::Render) => {
                        if let Err(e) = terminal.draw(|frame| ui::render(frame, &state, &theme)) {
                            tracing::error!(error = %e, "draw failed");
                            outcome = Err(e);
                            break 'event_loop;
                        }
                    }
                    Some(AppEvent::Key(key)) => {
                        if handle_key(key, &mut state) == KeyAction::Quit {
                            break 'event_loop;
                        }
                    }
                    Some(AppEvent::Mouse(mouse)) => {
                        handle_mouse(mouse, &mut state);
                    }
                    Some(AppEvent::Tick) => state.tick(),
                    Some(AppEvent::InsightResult(payload)) => {
                        state.apply_insight_result(*payload);
                    }
                    // Next Render picks up the new size from frame.area().
                    Some(AppEvent::Resize(_, _)) => {}
                    Some(AppEvent::Quit) | None => break 'event_loop,
                }
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
        }
    }

    tui::restore_tui()?;
    tracing::info!("mindcare stopped");
    outcome
}
