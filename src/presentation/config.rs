//! UI configuration
//!
//! Key bindings per tab, loaded through the infrastructure config layer.

pub mod keybindings;

pub use keybindings::KeyBindings;
