use serde::{Deserialize, Serialize};

use crate::model::status_bar;

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,

    Status(status_bar::Message),
}

impl SystemMsg {
    pub fn flash(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::Status(status_bar::Message::Flashed {
            label: label.into(),
            message: message.into(),
        })
    }

    pub fn error(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::Status(status_bar::Message::ErrorFlashed {
            label: label.into(),
            message: message.into(),
        })
    }

    pub fn clear_status() -> Self {
        SystemMsg::Status(status_bar::Message::Cleared)
    }
}
