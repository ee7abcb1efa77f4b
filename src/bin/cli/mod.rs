//! CLI Module Organization
//!
//! - args: CLI argument structures and value enums
//! - commands: command execution and configuration loading
//! - output: tables and coloured console display

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
