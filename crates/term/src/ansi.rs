//! Plain ANSI sequence builders: cursor movement, screen state, and the
//! 256-color dust palette.

use tui_walle_core::{FadeTier, Mote};

/// Warm beige -> mid brown -> dark brown as a particle burns out.
const FADE_COLORS: [u8; 3] = [180, 137, 94];

/// Move the cursor to a 1-based (column, row) cell.
pub fn move_to(col: u16, row: u16) -> String {
    format!("\x1b[{};{}H", row, col)
}

/// Blank a single cell by overwriting it with a space.
pub fn erase_at(col: u16, row: u16) -> String {
    format!("\x1b[{};{}H ", row, col)
}

pub fn clear_screen() -> &'static str {
    "\x1b[2J"
}

pub fn home() -> &'static str {
    "\x1b[H"
}

pub fn hide_cursor() -> &'static str {
    "\x1b[?25l"
}

pub fn show_cursor() -> &'static str {
    "\x1b[?25h"
}

pub fn reset() -> &'static str {
    "\x1b[0m"
}

/// Foreground color prefix for a fade tier.
pub fn fade_color(tier: FadeTier) -> String {
    let index = match tier {
        FadeTier::Bright => FADE_COLORS[0],
        FadeTier::Mid => FADE_COLORS[1],
        FadeTier::Dim => FADE_COLORS[2],
    };
    format!("\x1b[38;5;{}m", index)
}

/// Full draw sequence for one dust mote: color, position, glyph, reset.
pub fn draw_mote(mote: &Mote) -> String {
    format!(
        "{}{}{}{}",
        fade_color(mote.tier),
        move_to(mote.col as u16, mote.row as u16),
        mote.glyph,
        reset()
    )
}
