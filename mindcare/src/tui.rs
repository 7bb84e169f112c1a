//! Terminal lifecycle management for mindcare.
//!
//! Raw mode and the alternate screen are entered once in [`init_tui`] and
//! left in [`restore_tui`], which must run on every exit path, including a
//! panic on the main thread. Log output never touches the terminal (see
//! `logging`), so the UI can draw straight to stdout.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use signal_hook::consts::SIGTERM;
use signal_hook::flag::register;
use std::io::{stdout, BufWriter, Stdout};
use std::panic::{self, PanicHookInfo};
use std::thread;
use std::sync::{atomic::AtomicBool, Arc};

/// The terminal type used by mindcare: crossterm over a buffered stdout.
///
/// `BufWriter` batches escape sequences into fewer write(2) calls per frame.
pub type Tui = Terminal<CrosstermBackend<BufWriter<Stdout>>>;

/// Enables raw mode, enters the alternate screen, and turns on mouse capture
/// (for scroll-wheel support). Call [`restore_tui`] at every exit path.
///
/// # Errors
///
/// Returns `Err` if `enable_raw_mode`, `execute!`, or `Terminal::new` fails.
pub fn init_tui() -> std::io::Result<Tui> {
    let mut out = BufWriter::new(stdout());
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(out))
}

/// Restores the terminal to its pre-TUI state. Idempotent.
///
/// ratatui does not restore the terminal on `Drop`, so this has to be called
/// explicitly.
///
/// # Errors
///
/// Returns `Err` if `disable_raw_mode` or `execute!` fails. The panic hook
/// ignores the error.
pub fn restore_tui() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// The boxed hook type `std::panic::take_hook` returns.
pub(crate) type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Installs a panic hook that restores the terminal before the panic message
/// prints. Must be called before [`init_tui`]. Chains onto the previous hook.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(chain_panic_hook(original_hook, || {
        let _ = restore_tui();
    }));
}

/// Builds the hook installed by [`install_panic_hook`].
///
/// Only a panic on the main thread ends the event loop. Panics on runtime
/// worker threads belong to spawned tasks whose `JoinError` is handled by the
/// caller (see `send_guarded`), so they are logged and the terminal is left
/// as it is.
pub(crate) fn chain_panic_hook(
    original_hook: PanicHook,
    restore: impl Fn() + Send + Sync + 'static,
) -> PanicHook {
    Box::new(move |panic_info: &PanicHookInfo<'_>| {
        if is_fatal_panic(thread::current().name()) {
            restore();
            tracing::error!(%panic_info, "panic");
            original_hook(panic_info);
        } else {
            tracing::error!(%panic_info, "panic in background task");
        }
    })
}

/// `#[tokio::main]` runs the event loop on the thread named `main`.
fn is_fatal_panic(thread_name: Option<&str>) -> bool {
    thread_name == Some("main")
}

/// Registers a SIGTERM handler that sets the returned flag.
///
/// The main loop polls the flag on its heartbeat and after every event.
///
/// # Errors
///
/// Returns `Err` if the OS refuses to register the handler.
pub fn register_sigterm() -> std::io::Result<Arc<AtomicBool>> {
    let term = Arc::new(AtomicBool::new(false));
    register(SIGTERM, Arc::clone(&term))?;
    Ok(term)
}
