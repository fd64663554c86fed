//! Terminal protocol layer.
//!
//! Escape sequences are built as pure strings so every byte the engine
//! emits can be asserted in tests; the only impure edge is the
//! [`ScreenSession`] write/flush boundary.
//!
//! Goals:
//! - Keep `core` free of any terminal knowledge
//! - Encode the Kitty graphics protocol and plain ANSI exactly once
//! - Make shutdown/cleanup a single guarded operation

pub mod ansi;
pub mod kitty;
pub mod screen;

pub use screen::{terminal_size, ScreenSession};
