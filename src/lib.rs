//! timview (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the
//! application layer: command-line configuration, image loading and the
//! interactive slideshow loop.

pub use timview_core as core;
pub use timview_input as input;
pub use timview_term as term;
pub use timview_types as types;

pub mod config;
pub mod loader;
pub mod viewer;
