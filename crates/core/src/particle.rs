//! Dust particle lifecycle: spawn, drift, fade, prune.
//!
//! Ages are logical: a particle remembers the tick it was born on and the
//! caller passes the current tick into every operation. One tick is
//! [`TICK_SECS`] of simulated time, so lifetimes sampled in seconds line up
//! with the fixed frame cadence without reading a wall clock.

use tui_walle_types::{
    BURST_MAX, BURST_MIN, FADE_BRIGHT_ALPHA, FADE_MID_ALPHA, FOOT_ROW_MAX, FOOT_ROW_MIN,
    PARTICLE_GLYPHS, PARTICLE_LIFE_SECS, PARTICLE_X_DRIFT, PARTICLE_X_JITTER, PARTICLE_Y_DRIFT,
    PARTICLE_Y_JITTER, TICK_SECS,
};

use crate::rng::SimpleRng;

/// A single dust mote. Positions are fractional screen coordinates
/// (1-based cells once truncated); drifts are applied per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub x_drift: f32,
    pub y_drift: f32,
    pub glyph: char,
    /// Lifetime in seconds of simulated time.
    pub lifetime: f32,
    pub born_tick: u64,
}

impl Particle {
    pub fn new(x: f32, y: f32, x_drift: f32, y_drift: f32, glyph: char, lifetime: f32, born_tick: u64) -> Self {
        Self {
            x,
            y,
            x_drift,
            y_drift,
            glyph,
            lifetime,
            born_tick,
        }
    }

    /// Simulated age in seconds at the given tick.
    pub fn age(&self, now_tick: u64) -> f32 {
        now_tick.saturating_sub(self.born_tick) as f32 * TICK_SECS
    }

    /// A particle is visible only while `age < lifetime`.
    pub fn alive(&self, now_tick: u64) -> bool {
        self.age(now_tick) < self.lifetime
    }

    /// Remaining-life fraction, 1.0 at birth down to 0.0 at expiry.
    pub fn alpha(&self, now_tick: u64) -> f32 {
        1.0 - self.age(now_tick) / self.lifetime
    }

    /// Cell currently occupied (column, row), truncated like the renderer
    /// will truncate it.
    pub fn cell(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// Discrete fade step derived from remaining life, brightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTier {
    Bright,
    Mid,
    Dim,
}

impl FadeTier {
    pub fn from_alpha(alpha: f32) -> Self {
        if alpha > FADE_BRIGHT_ALPHA {
            FadeTier::Bright
        } else if alpha > FADE_MID_ALPHA {
            FadeTier::Mid
        } else {
            FadeTier::Dim
        }
    }
}

/// A renderable particle snapshot: where to draw, what, and how bright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mote {
    pub col: i32,
    pub row: i32,
    pub glyph: char,
    pub tier: FadeTier,
}

/// Owns the live particle set. Spawning, drifting, pruning, and fade
/// classification all happen here; rendering the motes is the terminal
/// layer's job.
#[derive(Debug, Clone)]
pub struct DustField {
    particles: Vec<Particle>,
    rng: SimpleRng,
}

impl DustField {
    pub fn new(seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Create `count` particles near `(origin_x, origin_y)`, each with
    /// independently randomized drift, lifetime, and glyph.
    pub fn spawn(&mut self, origin_x: f32, origin_y: f32, count: usize, now_tick: u64) {
        for _ in 0..count {
            let x = origin_x + self.rng.uniform(-PARTICLE_X_JITTER, PARTICLE_X_JITTER);
            let y = origin_y + self.rng.uniform(-PARTICLE_Y_JITTER, PARTICLE_Y_JITTER);
            let x_drift = self.rng.uniform(PARTICLE_X_DRIFT.0, PARTICLE_X_DRIFT.1);
            let y_drift = self.rng.uniform(PARTICLE_Y_DRIFT.0, PARTICLE_Y_DRIFT.1);
            let glyph = self.rng.pick(&PARTICLE_GLYPHS);
            let lifetime = self.rng.uniform(PARTICLE_LIFE_SECS.0, PARTICLE_LIFE_SECS.1);
            self.particles
                .push(Particle::new(x, y, x_drift, y_drift, glyph, lifetime, now_tick));
        }
    }

    /// Kick up a burst of 1-3 particles at the sprite's trailing foot:
    /// `trailing_x` is the sprite edge behind its direction of travel and
    /// the origin row lands 12-16 rows below the sprite's top.
    pub fn spawn_burst(&mut self, trailing_x: f32, sprite_top_row: f32, now_tick: u64) {
        let count = self.rng.range_inclusive(BURST_MIN, BURST_MAX) as usize;
        let origin_y = sprite_top_row + self.rng.range_inclusive(FOOT_ROW_MIN, FOOT_ROW_MAX) as f32;
        self.spawn(trailing_x, origin_y, count, now_tick);
    }

    /// Integrate one tick of drift for every live particle, then prune
    /// everything whose age has reached its lifetime. Pruning happens here,
    /// before any render pass on the same tick, so expired particles are
    /// never drawn. Returns the updated live set.
    pub fn advance(&mut self, now_tick: u64) -> &[Particle] {
        for p in &mut self.particles {
            p.x += p.x_drift;
            p.y += p.y_drift;
        }
        self.particles.retain(|p| p.alive(now_tick));
        &self.particles
    }

    /// Cells occupied right now. The frame loop blanks these before calling
    /// [`advance`](Self::advance), otherwise moved particles leave trails.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.particles.iter().map(Particle::cell)
    }

    /// Live particles as renderable motes. Expired particles are filtered
    /// even if the caller skipped pruning this tick.
    pub fn visible(&self, now_tick: u64) -> impl Iterator<Item = Mote> + '_ {
        self.particles.iter().filter_map(move |p| {
            if !p.alive(now_tick) {
                return None;
            }
            let (col, row) = p.cell();
            Some(Mote {
                col,
                row,
                glyph: p.glyph,
                tier: FadeTier::from_alpha(p.alpha(now_tick)),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_tier_thresholds() {
        assert_eq!(FadeTier::from_alpha(0.9), FadeTier::Bright);
        assert_eq!(FadeTier::from_alpha(0.5), FadeTier::Mid);
        assert_eq!(FadeTier::from_alpha(0.2), FadeTier::Dim);
        assert_eq!(FadeTier::from_alpha(0.0), FadeTier::Dim);
    }

    #[test]
    fn age_is_logical_ticks_times_cadence() {
        let p = Particle::new(5.0, 5.0, 0.0, 0.0, '·', 1.0, 100);
        assert_eq!(p.age(100), 0.0);
        assert!((p.age(119) - 0.95).abs() < 1e-6);
        assert!(p.alive(119));
        assert!(!p.alive(120));
    }

    #[test]
    fn spawn_randomizes_within_fixed_ranges() {
        let mut field = DustField::new(77);
        field.spawn(40.0, 20.0, 50, 0);
        assert_eq!(field.len(), 50);
        for p in field.advance(0) {
            assert!((-0.2..0.2).contains(&p.x_drift));
            assert!((-0.4..0.1).contains(&p.y_drift));
            assert!((0.8..1.4).contains(&p.lifetime));
            assert!(PARTICLE_GLYPHS.contains(&p.glyph));
        }
    }

    #[test]
    fn advance_moves_by_drift_per_tick() {
        let mut field = DustField::new(1);
        field.spawn(10.0, 10.0, 1, 0);
        let before = field.advance(0)[0].clone();
        let after = field.advance(1)[0].clone();
        assert!((after.x - (before.x + before.x_drift)).abs() < 1e-6);
        assert!((after.y - (before.y + before.y_drift)).abs() < 1e-6);
    }

    #[test]
    fn advance_prunes_expired_before_render() {
        let mut field = DustField::new(1);
        field.spawn(10.0, 10.0, 5, 0);
        // Lifetimes max out below 1.4s = 28 ticks.
        field.advance(28);
        assert!(field.is_empty());
        assert_eq!(field.visible(28).count(), 0);
    }

    #[test]
    fn visible_never_yields_expired_even_without_prune() {
        let mut field = DustField::new(1);
        field.spawn(10.0, 10.0, 10, 0);
        // No advance() call: visible() must filter on its own.
        assert_eq!(field.visible(1000).count(), 0);
    }

    #[test]
    fn same_seed_same_trajectories() {
        let mut a = DustField::new(99);
        let mut b = DustField::new(99);
        a.spawn(12.0, 30.0, 3, 0);
        b.spawn(12.0, 30.0, 3, 0);
        for tick in 1..10 {
            assert_eq!(a.advance(tick), b.advance(tick));
        }
    }
}
