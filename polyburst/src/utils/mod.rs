//! Shared utilities for the polyburst CLI

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
