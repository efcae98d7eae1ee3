//! Top-level screen composition
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::Tab, AppState},
    presentation::widgets::{
        CarouselWidget, ContactFormWidget, StatusBarWidget, TabBarWidget, TimerWidget,
        TodoListWidget,
    },
};

/// Key hints for the active tab
pub fn hint(state: &AppState) -> &'static str {
    match state.ui.active_tab {
        Tab::Contact => "Tab: next tab | Up/Down: field | Ctrl-s: send | Ctrl-c: quit",
        Tab::Carousel => "Tab: next tab | Left/Right: browse | q: quit",
        Tab::Timer => "Tab: next tab | s: start | x: stop | r: reset | q: quit",
        Tab::Todo if state.ui.is_composing() => "Enter: add | Esc: cancel",
        Tab::Todo => "Tab: next tab | a: add | j/k: select | Space: done | d: delete | q: quit",
    }
}

#[derive(Debug, Clone, Default)]
pub struct Components;

impl Components {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole screen: tab bar, the active tab and the status bar
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Tabs
                Constraint::Min(0),    // Active tab
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        frame.render_widget(TabBarWidget::new(state.ui.active_tab), layout[0]);
        self.view(state, frame, layout[1]);
        frame.render_widget(
            StatusBarWidget::new(&state.system.status_bar, hint(state)),
            layout[2],
        );
    }

    fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        match state.ui.active_tab {
            Tab::Contact => frame.render_widget(
                ContactFormWidget::new(
                    &state.contact_form,
                    state.ui.focused_field,
                    &state.ui.editor,
                ),
                area,
            ),
            Tab::Carousel => frame.render_widget(
                CarouselWidget::new(&state.carousel, &state.config.config.carousel.base_path),
                area,
            ),
            Tab::Timer => frame.render_widget(TimerWidget::new(&state.timer), area),
            Tab::Todo => frame.render_widget(
                TodoListWidget::new(&state.todo, state.selected_task(), &state.ui.editor),
                area,
            ),
        }
    }
}
