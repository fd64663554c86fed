//! Walking-robot terminal animation (default binary).
//!
//! Paints a backdrop and a bouncing sprite with the Kitty graphics protocol
//! and trails dust particles behind the sprite's feet. Runs at a fixed
//! ~20 Hz tick until interrupted, then restores the terminal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signal_hook::consts::{SIGINT, SIGTERM};

use tui_walle::assets::{Backdrop, SpriteImages};
use tui_walle::core::{DustField, Scene};
use tui_walle::term::{ansi, kitty, terminal_size, ScreenSession};
use tui_walle::types::{
    EngineConfig, BACKDROP_Z, SPAWN_INTERVAL_SECS, SPRITE_Z, TICK_MS, TICK_SECS,
};

fn main() -> Result<()> {
    let home = dirs::home_dir().context("cannot locate home directory")?;
    let config = EngineConfig::from_home(&home);

    // Asset load failures are fatal before the screen is touched.
    let sprites = SpriteImages::load(&config)?;
    let backdrop = Backdrop::load(&config.backdrop_path)?;

    // Raw mode turns Ctrl+C into a key event; the flag catches SIGINT/SIGTERM
    // sent from outside so cleanup runs for `kill` too.
    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&interrupted))?;
    signal_hook::flag::register(SIGTERM, Arc::clone(&interrupted))?;

    let mut screen = ScreenSession::stdout();
    screen.enter()?;

    let result = run(&mut screen, &config, &sprites, &backdrop, &interrupted);

    // Always restore the terminal, whatever way the loop ended.
    let (_, rows) = terminal_size();
    let _ = screen.restore(config.sprite_image_id, config.backdrop_image_id, rows);
    result
}

fn run(
    screen: &mut ScreenSession<std::io::Stdout>,
    config: &EngineConfig,
    sprites: &SpriteImages,
    backdrop: &Backdrop,
    interrupted: &AtomicBool,
) -> Result<()> {
    let (cols, rows) = terminal_size();
    let mut scene = Scene::new(cols, rows, config.sprite_cols, config.sprite_rows);
    let mut dust = DustField::new(time_seed());

    // The backdrop is transmitted exactly once, pinned behind everything.
    screen.write_str(&kitty::display_at(
        &backdrop.scaled_png(cols, rows)?,
        1,
        1,
        config.backdrop_image_id,
        BACKDROP_Z,
    ))?;
    screen.flush()?;

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut tick: u64 = 0;
    let mut spawn_accum: f32 = 0.0;
    let mut frame = String::new();

    loop {
        if interrupted.load(Ordering::Relaxed) {
            return Ok(());
        }

        // Input with timeout until the next tick doubles as the sleep.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
            }
        }
        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();
        tick += 1;

        // Re-query every tick so live resizes are tolerated without restart.
        let (cols, rows) = terminal_size();
        scene.resize(cols, rows);

        frame.clear();

        spawn_accum += TICK_SECS;
        if spawn_accum > SPAWN_INTERVAL_SECS {
            spawn_accum = 0.0;
            dust.spawn_burst(scene.trailing_x() as f32, scene.y() as f32, tick);
        }

        // Blank old particle cells before moving them, otherwise trails stay.
        for (col, row) in dust.cells() {
            if let Some((col, row)) = on_screen(col, row, cols, rows) {
                frame.push_str(&ansi::erase_at(col, row));
            }
        }
        dust.advance(tick);
        for mote in dust.visible(tick) {
            if on_screen(mote.col, mote.row, cols, rows).is_some() {
                frame.push_str(&ansi::draw_mote(&mote));
            }
        }

        // Re-sending the sprite id supersedes the old frame, but deleting
        // first avoids a brief compositing artifact on some terminals.
        frame.push_str(&kitty::delete_image(config.sprite_image_id));
        frame.push_str(&kitty::display_at(
            sprites.facing(scene.direction()),
            scene.x().max(1) as u16,
            scene.y(),
            config.sprite_image_id,
            SPRITE_Z,
        ));

        scene.step();

        screen.write_str(&frame)?;
        screen.flush()?;
    }
}

fn should_quit(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn on_screen(col: i32, row: i32, cols: u16, rows: u16) -> Option<(u16, u16)> {
    if col >= 1 && row >= 1 && col <= cols as i32 && row <= rows as i32 {
        Some((col as u16, row as u16))
    } else {
        None
    }
}

fn time_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
