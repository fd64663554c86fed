//! Shared types and fixed tuning constants.
//!
//! This crate contains pure data types with no external dependencies.
//! All knobs of the animation live here as constants; runtime inputs
//! (asset paths, image ids, base art orientation) travel in an explicit
//! [`EngineConfig`] so nothing is ambient global state.

use std::path::{Path, PathBuf};

/// Frame cadence (milliseconds per tick, ~20 Hz).
pub const TICK_MS: u32 = 50;
/// Frame cadence in seconds, used for logical particle ages.
pub const TICK_SECS: f32 = 0.05;
/// Dust burst pacing: spawn once the accumulator passes this many seconds.
pub const SPAWN_INTERVAL_SECS: f32 = 0.08;

/// Sprite footprint in terminal cells.
pub const SPRITE_COLS: u16 = 45;
pub const SPRITE_ROWS: u16 = 18;
/// Pixels of rasterized sprite per terminal column.
pub const SPRITE_PX_PER_COL: u32 = 10;

/// Assumed cell size in pixels when scaling the backdrop to the terminal.
pub const CELL_PX_WIDTH: u32 = 9;
pub const CELL_PX_HEIGHT: u32 = 18;

/// Kitty image-store ids. The backdrop keeps a lower z-index so the sprite
/// always paints on top.
pub const BACKDROP_IMAGE_ID: u32 = 1;
pub const SPRITE_IMAGE_ID: u32 = 2;
pub const BACKDROP_Z: i32 = -1;
pub const SPRITE_Z: i32 = 5;

/// Backdrop brightness multiplier (slight dim for a cinematic look).
pub const BACKDROP_DIM: f32 = 0.8;

/// Dust particle tuning. Drifts are applied per tick, not per second.
pub const PARTICLE_LIFE_SECS: (f32, f32) = (0.8, 1.4);
pub const PARTICLE_X_DRIFT: (f32, f32) = (-0.2, 0.2);
pub const PARTICLE_Y_DRIFT: (f32, f32) = (-0.4, 0.1);
pub const PARTICLE_GLYPHS: [char; 4] = ['·', '˙', '•', '∙'];
/// Spawn jitter around the burst origin (columns, rows).
pub const PARTICLE_X_JITTER: f32 = 2.0;
pub const PARTICLE_Y_JITTER: f32 = 1.0;
/// Particles per burst, inclusive.
pub const BURST_MIN: u32 = 1;
pub const BURST_MAX: u32 = 3;
/// Rows below the sprite's top where its feet are (burst origin band).
pub const FOOT_ROW_MIN: u32 = 12;
pub const FOOT_ROW_MAX: u32 = 16;

/// Fade thresholds on remaining-life fraction `alpha = 1 - age/lifetime`.
pub const FADE_BRIGHT_ALPHA: f32 = 0.7;
pub const FADE_MID_ALPHA: f32 = 0.4;

/// Horizontal facing / travel direction of the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn flipped(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Immutable engine configuration, constructed once in `main` and passed
/// down. Multiple instances can coexist (tests construct their own).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Vector source for the walking sprite.
    pub sprite_path: PathBuf,
    /// Raster backdrop painted once behind everything.
    pub backdrop_path: PathBuf,
    /// Which way the raw sprite art faces before any mirroring.
    pub base_orientation: Direction,
    pub sprite_image_id: u32,
    pub backdrop_image_id: u32,
    /// Sprite footprint in terminal cells.
    pub sprite_cols: u16,
    pub sprite_rows: u16,
}

impl EngineConfig {
    /// The fixed home-relative asset layout: `~/walle/walle.svg` and
    /// `~/walle/bg.jpg`.
    pub fn from_home(home: &Path) -> Self {
        Self {
            sprite_path: home.join("walle").join("walle.svg"),
            backdrop_path: home.join("walle").join("bg.jpg"),
            base_orientation: Direction::Left,
            sprite_image_id: SPRITE_IMAGE_ID,
            backdrop_image_id: BACKDROP_IMAGE_ID,
            sprite_cols: SPRITE_COLS,
            sprite_rows: SPRITE_ROWS,
        }
    }
}
