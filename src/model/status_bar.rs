use serde::{Deserialize, Serialize};

/// One-line flash area shared by all tabs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Flashed { label: String, message: String },
    ErrorFlashed { label: String, message: String },
    Cleared,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    message: Option<String>,
    is_error: bool,
}

impl StatusBar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    fn set_message(&mut self, label: String, message: String, is_error: bool) {
        let normalized_message = message.replace('\n', " ");
        self.message = Some(format!("[{label}] {normalized_message}"));
        self.is_error = is_error;
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Flashed { label, message } => self.set_message(label, message, false),
            Message::ErrorFlashed { label, message } => {
                self.set_message(format!("ERR: {label}"), message, true)
            }
            Message::Cleared => {
                self.message = None;
                self.is_error = false;
            }
        }
    }
}
