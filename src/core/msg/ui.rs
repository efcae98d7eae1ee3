use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::ui::Tab;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    NextTab,
    PreviousTab,
    SelectTab(Tab),

    // Contact form focus
    NextField,
    PreviousField,

    // Todo composer
    StartComposing,
    CancelComposing,
    SubmitComposing,

    /// Raw key forwarded to the active editor
    EditorInput(KeyEvent),

    SelectNextTask,
    SelectPreviousTask,
}
