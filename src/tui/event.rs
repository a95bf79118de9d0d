use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// How long to wait for a key before checking for a caught signal.
const SIGNAL_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// Signals that end the session early. While the session runs they are
/// caught so raw mode can be restored; afterwards they terminate at once.
#[cfg(unix)]
const WATCHED_SIGNALS: [i32; 4] = [
    signal_hook::consts::SIGTERM,
    signal_hook::consts::SIGHUP,
    signal_hook::consts::SIGINT,
    signal_hook::consts::SIGQUIT,
];

/// A single keypress from the control terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    /// Ctrl+C. Raw mode turns off SIGINT, so it arrives as a key.
    Interrupt,
    /// Anything that is not a plain character: arrows, function keys,
    /// Enter, Ctrl/Alt chords...
    Other,
    /// A termination signal arrived while waiting for a key.
    Signal(i32),
}

/// Blocking source of keypresses.
pub trait KeySource {
    fn next_key(&mut self) -> io::Result<KeyPress>;
}

/// Reads keys through crossterm. With stdin redirected, crossterm falls
/// back to the controlling terminal device for input.
///
/// Termination signals are recorded instead of killing the process and
/// reported as [`KeyPress::Signal`], so the caller unwinds normally and
/// the raw-mode guard runs. Dropping the reader re-arms the default exit.
pub struct TerminalKeys {
    caught: Arc<AtomicUsize>,
    released: Arc<AtomicBool>,
}

impl TerminalKeys {
    pub fn new() -> io::Result<Self> {
        let keys = Self {
            caught: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicBool::new(false)),
        };
        #[cfg(unix)]
        {
            for signal in WATCHED_SIGNALS {
                let value = signal as usize;
                signal_hook::flag::register_usize(signal, Arc::clone(&keys.caught), value)?;
                signal_hook::flag::register_conditional_shutdown(
                    signal,
                    128 + signal,
                    Arc::clone(&keys.released),
                )?;
            }
        }
        Ok(keys)
    }

    fn pending_signal(&self) -> Option<KeyPress> {
        match self.caught.load(Ordering::SeqCst) {
            0 => None,
            signal => Some(KeyPress::Signal(signal as i32)),
        }
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyPress> {
        loop {
            if let Some(signal) = self.pending_signal() {
                log::warn!("Caught {:?} while waiting for a key", signal);
                return Ok(signal);
            }
            if event::poll(SIGNAL_CHECK_INTERVAL)?
                && let Event::Key(key_event) = event::read()?
                && let Some(key) = translate(key_event)
            {
                return Ok(key);
            }
        }
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

/// Map a crossterm key event, ignoring releases and repeats.
///
/// Only bare or shifted characters count as command keys; any other
/// modifier chord is [`KeyPress::Other`], except Ctrl+C.
fn translate(key_event: KeyEvent) -> Option<KeyPress> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(KeyPress::Interrupt),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => Some(KeyPress::Char(c)),
        _ => Some(KeyPress::Other),
    }
}
