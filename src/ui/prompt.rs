//! Reading the user's selections from stdin.

use crate::log_debug;
use crate::menu::ModeMenu;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Prints `prompt` and blocks for one line of input. `None` means the user
/// submitted nothing (bare Enter) or stdin closed.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// Blocks for one line of input with a deadline. `None` means the timer
/// elapsed first, the user submitted nothing, or stdin closed.
///
/// The reader thread is detached on timeout; the process execs into the
/// session program right after, so an abandoned blocked read is harmless.
pub fn read_line_timeout(timeout: Duration) -> io::Result<Option<String>> {
    let (sender, receiver) = mpsc::channel();

    thread::Builder::new()
        .name("choice-reader".to_string())
        .spawn(move || {
            let mut line = String::new();
            let outcome = io::stdin()
                .lock()
                .read_line(&mut line)
                .map(|bytes| if bytes == 0 { None } else { Some(line) });
            let _ = sender.send(outcome);
        })?;

    match receiver.recv_timeout(timeout) {
        Ok(Ok(Some(line))) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Ok(Ok(None)) => Ok(None),
        Ok(Err(err)) => Err(err),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            log_debug!("Sub-choice prompt timed out after {:?}", timeout);
            Ok(None)
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => Ok(None),
    }
}

/// Prints the numbered capability menu for a host, defaulting to option 1.
pub fn print_mode_menu(host_name: &str, menu: &ModeMenu) -> io::Result<()> {
    let mut stdout = io::stdout();

    writeln!(stdout, "\nConnect to {}:", host_name)?;
    for (position, capability) in menu.options().iter().enumerate() {
        writeln!(stdout, "  {}) {}", position + 1, capability.label())?;
    }
    write!(stdout, "Choice [1]: ")?;
    stdout.flush()
}
