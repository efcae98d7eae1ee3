//! # widgetui
//!
//! Four small interactive widgets in one terminal app: a validated contact
//! form, an image carousel, a stopwatch and a to-do list.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** ([`model`]): the widget models, each a plain state machine
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): a pure function from state and message to
//!   new state and commands
//! - **Command** ([`core::cmd`]): side effects for the host (timer interval, logging)
//! - **View** ([`presentation`]): stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use widgetui::{
//!     core::{cmd::Cmd, msg::Msg, state::AppState, update::update},
//!     model::timer,
//! };
//!
//! let (state, commands) = update(Msg::Timer(timer::Message::Started), AppState::default());
//!
//! assert!(state.timer.is_running());
//! assert_eq!(commands, vec![Cmd::ScheduleTick]);
//! ```

pub mod core;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
