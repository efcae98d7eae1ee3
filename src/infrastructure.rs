//! Infrastructure layer
//!
//! - Configuration loading
//! - CLI argument processing
//! - Terminal backends (crossterm and test)
//! - The timer's tick clock

pub mod cli;
pub mod config;
pub mod ticker;
pub mod tui;
