//! User interface and interaction
//!
//! This module contains the CLI definitions and shell completion
//! generation.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, Commands, print_completions, resolve_report_kind};
