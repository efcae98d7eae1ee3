use std::{collections::VecDeque, mem};

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Owns the application state and drives translate -> update.
///
/// Commands are queued for the host; the runtime itself performs no I/O.
#[derive(Debug, Default)]
pub struct Runtime {
    state: AppState,
    raw_msg_queue: VecDeque<RawMsg>,
    msg_queue: VecDeque<Msg>,
    cmd_queue: VecDeque<Cmd>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            ..Default::default()
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Apply one message and queue whatever commands it produced
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("Processing {msg:?}");
        }
        let (state, commands) = update(msg, mem::take(&mut self.state));
        self.state = state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Drain every queued raw and domain message.
    ///
    /// Each raw message is translated against the state left by the previous one.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                all_commands.extend(self.process_message(msg));
            }
        }

        all_commands
    }

    /// Take the commands produced since the last call
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }
}
