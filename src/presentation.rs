//! Presentation layer
//!
//! Stateless rendering of [`AppState`](crate::core::state::AppState) plus the
//! keybinding configuration that maps keys to actions.

pub mod components;
pub mod config;
pub mod widgets;
