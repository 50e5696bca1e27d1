//! Polyburst CLI library
//!
//! Command definitions and helpers for the `polyburst` binary.

#![allow(clippy::print_stdout)] // reports are the CLI's output

pub mod cli;
pub mod commands;
pub mod utils;
