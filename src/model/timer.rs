//! Stopwatch model
//!
//! `Timer` is a two-state machine (`Stopped`/`Running`) over an elapsed-seconds
//! counter. It never owns a clock: the host calls [`Timer::tick`] once per
//! second while it has an interval scheduled, and schedules or cancels that
//! interval in response to the signals returned by [`Timer::start`] and
//! [`Timer::stop`].

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Started,
    Stopped,
    Reset,
    Ticked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum State {
    #[default]
    Stopped,
    Running,
}

/// Notification from the timer to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Started,
    Stopped,
    Updated(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    elapsed_seconds: u64,
    is_running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn state(&self) -> State {
        if self.is_running {
            State::Running
        } else {
            State::Stopped
        }
    }

    /// Elapsed time as `HH:MM:SS`
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_seconds)
    }

    /// Signals `Started` on every call, including when already running.
    pub fn start(&mut self) -> Signal {
        self.is_running = true;
        Signal::Started
    }

    /// Signals `Stopped` on every call, including when already stopped.
    pub fn stop(&mut self) -> Signal {
        self.is_running = false;
        Signal::Stopped
    }

    /// Zero the counter and force `Stopped` without signalling.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.is_running = false;
    }

    /// Advance by one second. No-op while stopped.
    pub fn tick(&mut self) -> Option<Signal> {
        if !self.is_running {
            return None;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        Some(Signal::Updated(self.elapsed_seconds))
    }

    pub fn update(&mut self, message: Message) -> Vec<Signal> {
        match message {
            Message::Started => vec![self.start()],
            Message::Stopped => vec![self.stop()],
            Message::Reset => {
                self.reset();
                vec![]
            }
            Message::Ticked => self.tick().into_iter().collect(),
        }
    }
}

/// Render a second count as zero-padded `HH:MM:SS`.
///
/// Hours do not wrap at 24.
pub fn format_clock(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
