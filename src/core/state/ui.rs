use serde::{Deserialize, Serialize};
use strum::Display;

use crate::model::{
    editor::{self, Editor},
    validation::Field,
};

const TASK_EDITOR_TITLE: &str = "New task: Enter to add, Esc to cancel";

/// Top-level screens, in tab bar order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Contact,
    Carousel,
    Timer,
    Todo,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Contact, Tab::Carousel, Tab::Timer, Tab::Todo];

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|tab| *tab == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_tab: Tab,
    pub focused_field: Field,
    pub selected_task: Option<usize>,
    pub editor: Editor<'static>,
}

impl UiState {
    pub fn is_composing(&self) -> bool {
        self.editor.is_active()
    }

    pub fn start_field_editor(&mut self, field: Field, value: &str) {
        self.editor.update(editor::Message::ComposingStarted {
            title: field.label().to_string(),
            content: value.to_string(),
            single_line: field != Field::Message,
        });
    }

    pub fn start_task_editor(&mut self) {
        self.editor.update(editor::Message::ComposingStarted {
            title: TASK_EDITOR_TITLE.to_string(),
            content: String::new(),
            single_line: true,
        });
    }

    pub fn stop_editor(&mut self) {
        self.editor.update(editor::Message::ComposingCanceled);
    }

    pub fn select_next_task(&mut self, len: usize) {
        if len == 0 {
            self.selected_task = None;
            return;
        }
        self.selected_task = Some(match self.selected_task {
            Some(index) => (index + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_previous_task(&mut self, len: usize) {
        if len == 0 {
            self.selected_task = None;
            return;
        }
        self.selected_task = Some(match self.selected_task {
            Some(index) => index.saturating_sub(1).min(len - 1),
            None => len - 1,
        });
    }

    /// Keep the cursor on a live task after the list shrinks
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_task = match (self.selected_task, len) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(Tab::Contact, Tab::Carousel)]
    #[case(Tab::Carousel, Tab::Timer)]
    #[case(Tab::Timer, Tab::Todo)]
    #[case(Tab::Todo, Tab::Contact)]
    fn test_tab_cycle(#[case] from: Tab, #[case] to: Tab) {
        assert_eq!(from.next(), to);
        assert_eq!(to.previous(), from);
    }

    #[test]
    fn test_tab_index_and_display() {
        assert_eq!(Tab::Contact.index(), 0);
        assert_eq!(Tab::Todo.index(), 3);
        assert_eq!(Tab::Timer.to_string(), "Timer");
    }

    #[rstest]
    #[case(None, 3, Some(0))]
    #[case(Some(0), 3, Some(1))]
    #[case(Some(2), 3, Some(2))]
    #[case(Some(1), 0, None)]
    fn test_select_next_task(
        #[case] selected: Option<usize>,
        #[case] len: usize,
        #[case] expected: Option<usize>,
    ) {
        let mut ui = UiState {
            selected_task: selected,
            ..Default::default()
        };
        ui.select_next_task(len);
        assert_eq!(ui.selected_task, expected);
    }

    #[rstest]
    #[case(None, 3, Some(2))]
    #[case(Some(2), 3, Some(1))]
    #[case(Some(0), 3, Some(0))]
    #[case(None, 0, None)]
    fn test_select_previous_task(
        #[case] selected: Option<usize>,
        #[case] len: usize,
        #[case] expected: Option<usize>,
    ) {
        let mut ui = UiState {
            selected_task: selected,
            ..Default::default()
        };
        ui.select_previous_task(len);
        assert_eq!(ui.selected_task, expected);
    }

    #[rstest]
    #[case(Some(3), 3, Some(2))]
    #[case(Some(1), 3, Some(1))]
    #[case(Some(0), 0, None)]
    #[case(None, 2, None)]
    fn test_clamp_selection(
        #[case] selected: Option<usize>,
        #[case] len: usize,
        #[case] expected: Option<usize>,
    ) {
        let mut ui = UiState {
            selected_task: selected,
            ..Default::default()
        };
        ui.clamp_selection(len);
        assert_eq!(ui.selected_task, expected);
    }

    #[test]
    fn test_field_editor_is_single_line_except_message() {
        let mut ui = UiState::default();
        ui.start_field_editor(Field::Email, "x");
        assert!(ui.is_composing());
        assert!(ui.editor.is_single_line());

        ui.start_field_editor(Field::Message, "");
        assert!(!ui.editor.is_single_line());

        ui.stop_editor();
        assert!(!ui.is_composing());
    }
}
