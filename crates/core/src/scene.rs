//! Scene state: sprite position, facing, and screen bounds.
//!
//! A two-state machine (moving left / moving right) stepping exactly one
//! column per tick. Bounds are derived from the terminal size and are meant
//! to be refreshed every tick, so live resizes never require a restart.

use tui_walle_types::Direction;

/// Sprite position and travel state. Columns and rows are 1-based terminal
/// coordinates; `x`/`y` address the sprite's top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    x: i32,
    y: u16,
    direction: Direction,
    left_bound: i32,
    right_bound: i32,
    sprite_cols: u16,
    sprite_rows: u16,
}

impl Scene {
    /// Start at the right edge, walking left (the sprite enters the frame).
    pub fn new(cols: u16, rows: u16, sprite_cols: u16, sprite_rows: u16) -> Self {
        let mut scene = Self {
            x: (cols as i32 - sprite_cols as i32).max(1),
            y: 1,
            direction: Direction::Left,
            left_bound: 1,
            right_bound: 1,
            sprite_cols,
            sprite_rows,
        };
        scene.resize(cols, rows);
        scene
    }

    /// Recompute bounds and the bottom-anchored row from the current
    /// terminal size, clamping `x` back inside. Called every tick.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.left_bound = 1;
        self.right_bound = (cols as i32 - self.sprite_cols as i32).max(1);
        self.y = (rows as i32 - self.sprite_rows as i32).max(1) as u16;
        self.x = self.x.clamp(self.left_bound, self.right_bound);
    }

    /// Advance one column in the current direction, flipping exactly when a
    /// bound is touched. `x` never leaves `[left_bound, right_bound]`.
    pub fn step(&mut self) {
        match self.direction {
            Direction::Left => {
                self.x = (self.x - 1).max(self.left_bound);
                if self.x <= self.left_bound {
                    self.direction = Direction::Right;
                }
            }
            Direction::Right => {
                self.x = (self.x + 1).min(self.right_bound);
                if self.x >= self.right_bound {
                    self.direction = Direction::Left;
                }
            }
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> u16 {
        self.y
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn left_bound(&self) -> i32 {
        self.left_bound
    }

    pub fn right_bound(&self) -> i32 {
        self.right_bound
    }

    /// Column of the sprite edge behind its travel direction; dust is
    /// kicked up there.
    pub fn trailing_x(&self) -> i32 {
        match self.direction {
            Direction::Left => self.x + self.sprite_cols as i32,
            Direction::Right => self.x,
        }
    }
}
