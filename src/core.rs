//! Core Elm architecture
//!
//! - Raw messages from the terminal and background tasks
//! - Domain messages and the state they update
//! - The pure update function and the commands it returns
//! - Translation from raw input to domain messages

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
