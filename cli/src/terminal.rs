use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, stdout};

/// Keeps the terminal in raw mode with a hidden cursor until dropped.
pub struct RawMode;

impl RawMode {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), Hide)?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(err) = execute!(stdout(), Show).and_then(|()| disable_raw_mode()) {
            log::error!("failed to restore terminal: {}", err);
        }
    }
}
