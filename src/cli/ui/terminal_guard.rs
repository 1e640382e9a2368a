//! Scoped terminal modes. Each guard undoes what it enabled when dropped.

use std::io::{self, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal, ExecutableCommand,
};

pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn activate() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { active: true })
    }

    pub fn deactivate(&mut self) {
        if self.active {
            let _ = terminal::disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Mouse reporting for the lifetime of the picker, including presses outside
/// its own rows.
pub struct MouseCaptureGuard {
    active: bool,
}

impl MouseCaptureGuard {
    pub fn activate<W: Write>(out: &mut W) -> io::Result<Self> {
        out.execute(EnableMouseCapture)?;
        Ok(Self { active: true })
    }

    pub fn deactivate(&mut self) {
        if self.active {
            let _ = io::stdout().execute(DisableMouseCapture);
            self.active = false;
        }
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        self.deactivate();
    }
}
