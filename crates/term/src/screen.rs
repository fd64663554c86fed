//! ScreenSession: the thin boundary between pure sequence builders and a
//! real terminal.
//!
//! Everything the engine emits goes through [`ScreenSession::write_str`];
//! tests swap the writer for a `Vec<u8>` and assert the exact bytes.
//! Shutdown restoration is guarded so it runs exactly once no matter how
//! many exit paths reach it.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::terminal;

use crate::{ansi, kitty};

/// Current terminal size in (columns, rows), with a sane fallback when the
/// query fails. Callers re-query every tick; the size is never cached here.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((80, 24))
}

pub struct ScreenSession<W: Write> {
    out: W,
    /// Whether this session owns the global raw-mode toggle.
    manage_raw: bool,
    restored: bool,
}

impl ScreenSession<io::Stdout> {
    /// Session over the process stdout, managing raw mode so key presses
    /// (including Ctrl+C) arrive as events instead of signals.
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            manage_raw: true,
            restored: false,
        }
    }
}

impl<W: Write> ScreenSession<W> {
    /// Session over an arbitrary writer; raw mode is left alone.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            manage_raw: false,
            restored: false,
        }
    }

    /// Clear the screen, home the cursor, and hide it.
    pub fn enter(&mut self) -> Result<()> {
        if self.manage_raw {
            terminal::enable_raw_mode()?;
        }
        self.out.write_all(ansi::clear_screen().as_bytes())?;
        self.out.write_all(ansi::home().as_bytes())?;
        self.out.write_all(ansi::hide_cursor().as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Undo everything the animation did to the terminal: delete both
    /// images from the image store, clear the screen, park the cursor on
    /// `park_row`, and show it again. Runs at most once; later calls are
    /// no-ops so every exit path can invoke it unconditionally.
    pub fn restore(&mut self, sprite_image_id: u32, backdrop_image_id: u32, park_row: u16) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        self.out.write_all(kitty::delete_image(sprite_image_id).as_bytes())?;
        self.out.write_all(kitty::delete_image(backdrop_image_id).as_bytes())?;
        self.out.write_all(ansi::clear_screen().as_bytes())?;
        self.out.write_all(ansi::move_to(1, park_row).as_bytes())?;
        self.out.write_all(ansi::show_cursor().as_bytes())?;
        self.out.flush()?;

        if self.manage_raw {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    /// Consume the session, yielding the writer (used by tests to inspect
    /// emitted bytes).
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_clears_homes_and_hides_cursor() {
        let mut session = ScreenSession::with_writer(Vec::new());
        session.enter().unwrap();
        let bytes = String::from_utf8(session.into_inner()).unwrap();
        assert_eq!(bytes, "\x1b[2J\x1b[H\x1b[?25l");
    }

    #[test]
    fn restore_clears_both_images_and_shows_cursor() {
        let mut session = ScreenSession::with_writer(Vec::new());
        session.restore(2, 1, 24).unwrap();
        let bytes = String::from_utf8(session.into_inner()).unwrap();
        assert_eq!(bytes.matches("\x1b_Ga=d,d=i,i=2\x1b\\").count(), 1);
        assert_eq!(bytes.matches("\x1b_Ga=d,d=i,i=1\x1b\\").count(), 1);
        assert!(bytes.contains("\x1b[?25h"));
        assert!(bytes.contains("\x1b[24;1H"));
    }

    #[test]
    fn restore_runs_exactly_once() {
        let mut session = ScreenSession::with_writer(Vec::new());
        session.restore(2, 1, 24).unwrap();
        session.restore(2, 1, 24).unwrap();
        let bytes = String::from_utf8(session.into_inner()).unwrap();
        assert_eq!(bytes.matches("a=d").count(), 2);
        assert_eq!(bytes.matches("\x1b[?25h").count(), 1);
    }
}
