//! Simulation core - pure, deterministic, and testable.
//!
//! This crate holds the temporal/state logic of the animation: the dust
//! particle lifecycle, the sprite's direction state machine, and the
//! seedable RNG behind every randomized attribute. It has **zero
//! dependencies** on I/O, the terminal, or wall-clock time, making it:
//!
//! - **Deterministic**: the same seed produces identical particle
//!   trajectories (time is a logical tick counter advanced by the caller)
//! - **Testable**: every invariant can be asserted without sleeping or a
//!   real terminal
//!
//! # Module Structure
//!
//! - [`particle`]: dust motes with drift, lifetime, and fade tiers
//! - [`rng`]: small seedable LCG used for all particle randomness
//! - [`scene`]: sprite position, facing, and resize-tolerant bounds

pub mod particle;
pub mod rng;
pub mod scene;

pub use particle::{DustField, FadeTier, Mote, Particle};
pub use rng::SimpleRng;
pub use scene::Scene;
