use serde::{Deserialize, Serialize};

/// Side effects requested by `update` and carried out by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Start the one-second timer interval unless one is already live
    ScheduleTick,
    /// Drop the live timer interval, if any
    CancelTick,

    LogInfo { message: String },
    LogError { message: String },
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Self {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_error(message: impl Into<String>) -> Self {
        Cmd::LogError {
            message: message.into(),
        }
    }
}
