//! Host side of the Elm loop
//!
//! [`runtime::Runtime`] owns the state and turns raw input into commands;
//! [`app_runner::AppRunner`] connects it to a terminal and the timer ticker.

pub mod app_runner;
pub mod runtime;
