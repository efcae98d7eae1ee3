use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Unprocessed events from the terminal and background tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // Terminal lifecycle
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    Key(KeyEvent),

    /// One elapsed second from the timer interval, tagged with its generation
    TimerTick(u64),

    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::TimerTick(_))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(RawMsg::TimerTick(1).is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> color_eyre::Result<()> {
        let msg = RawMsg::Error("test error".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
