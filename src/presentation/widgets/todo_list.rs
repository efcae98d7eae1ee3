use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::{
    editor::Editor,
    todo_list::{Task, TodoList},
};

pub struct TodoListWidget<'a> {
    todo: &'a TodoList,
    selected: Option<usize>,
    editor: &'a Editor<'a>,
}

impl<'a> TodoListWidget<'a> {
    pub fn new(todo: &'a TodoList, selected: Option<usize>, editor: &'a Editor<'a>) -> Self {
        Self {
            todo,
            selected,
            editor,
        }
    }

    fn item(task: &Task) -> ListItem<'_> {
        if task.is_done() {
            ListItem::new(format!("[x] {}", task.text()))
                .style(Style::default().fg(Color::Green).crossed_out())
        } else {
            ListItem::new(format!("[ ] {}", task.text()))
        }
    }

    pub fn summary(&self) -> String {
        format!("{}/{} done", self.todo.completed_count(), self.todo.len())
    }
}

impl<'a> Widget for TodoListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let composer_height = if self.editor.is_active() { 3 } else { 0 };
        let [list_area, composer_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(composer_height),
        ])
        .areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Tasks")
            .title_bottom(Line::from(self.summary()).right_aligned());

        if self.todo.is_empty() {
            Paragraph::new(Line::from("No tasks yet").italic().fg(Color::DarkGray))
                .block(block)
                .render(list_area, buf);
        } else {
            let list = List::new(self.todo.tasks().iter().map(Self::item))
                .block(block)
                .highlight_style(Style::default().reversed())
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(self.selected);
            StatefulWidget::render(list, list_area, buf, &mut state);
        }

        if self.editor.is_active() {
            self.editor.textarea().render(composer_area, buf);
        }
    }
}
