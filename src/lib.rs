//! tui-walle (workspace facade crate).
//!
//! This package keeps a single `tui_walle::{assets,core,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_walle_assets as assets;
pub use tui_walle_core as core;
pub use tui_walle_term as term;
pub use tui_walle_types as types;
