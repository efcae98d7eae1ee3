pub mod system;
pub mod ui;

use crate::{
    infrastructure::config::Config,
    model::{
        carousel::Carousel, contact_form::ContactForm, timer::Timer, todo_list::TodoList,
    },
};
use system::SystemState;
use ui::{Tab, UiState};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub contact_form: ContactForm,
    pub carousel: Carousel,
    pub timer: Timer,
    pub todo: TodoList,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    /// Build the initial state from configuration, opening `tab` first
    pub fn new_with_config(config: Config, tab: Tab) -> Self {
        let mut state = Self {
            carousel: Carousel::new(config.carousel.images.clone()),
            todo: TodoList::with_policy(config.todo.blank_task_policy()),
            config: ConfigState { config },
            ..Default::default()
        };
        state.focus_tab(tab);
        state
    }

    /// Switch tabs, closing any editor and reopening the contact field editor when needed
    pub fn focus_tab(&mut self, tab: Tab) {
        self.ui.stop_editor();
        self.ui.active_tab = tab;
        if tab == Tab::Contact {
            self.edit_focused_field();
        }
    }

    /// Load the focused contact field into the editor
    pub fn edit_focused_field(&mut self) {
        let field = self.ui.focused_field;
        self.ui
            .start_field_editor(field, self.contact_form.value(field));
    }

    /// The task under the todo cursor
    pub fn selected_task(&self) -> Option<usize> {
        self.ui
            .selected_task
            .filter(|index| *index < self.todo.len())
    }
}
