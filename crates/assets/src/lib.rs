//! One-time asset pipeline: sprite rasterization/mirroring and backdrop
//! scaling.
//!
//! Everything here runs before the frame loop starts. A failure is fatal at
//! startup (the loop is never entered); nothing in this crate is touched
//! again per frame.

pub mod backdrop;
pub mod sprite;

pub use backdrop::Backdrop;
pub use sprite::SpriteImages;
