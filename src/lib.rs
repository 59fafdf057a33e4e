//! Per-character text colorizer.
//!
//! [`color`] holds the named color table and the contrast-aware selector;
//! the remaining modules are the command-line plumbing around it.

pub mod color;
pub mod error;
pub mod input;
pub mod logging;
pub mod mode;
pub mod output;
pub mod render;
