//! CLI module for the fman command-line interface
//!
//! Argument parsing and the command handlers that call into the library.

pub mod args;
pub mod commands;
