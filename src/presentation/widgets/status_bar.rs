use ratatui::{prelude::*, widgets::Paragraph};

use crate::model::status_bar::StatusBar;

/// Key hint line followed by the flash message line
pub struct StatusBarWidget<'a> {
    status_bar: &'a StatusBar,
    hint: &'a str,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(status_bar: &'a StatusBar, hint: &'a str) -> Self {
        Self { status_bar, hint }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1), // Key hints
                Constraint::Length(1), // Status message
            ],
        )
        .split(area);

        Paragraph::new(Span::styled(self.hint, Style::default().fg(Color::Gray).italic()))
            .style(Style::default().bg(Color::Black))
            .render(layout[1], buf);

        let style = if self.status_bar.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        Paragraph::new(self.status_bar.message().unwrap_or_default())
            .style(style)
            .render(layout[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::status_bar::Message;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_render_hint_and_message() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::Flashed {
            label: "Form".to_string(),
            message: "Message sent successfully!".to_string(),
        });
        let area = Rect::new(0, 0, 60, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(&status_bar, "q: quit").render(area, &mut buffer);

        assert_eq!(row(&buffer, 0).trim_end(), "q: quit");
        assert_eq!(
            row(&buffer, 1).trim_end(),
            "[Form] Message sent successfully!"
        );
        assert_eq!(buffer[(0, 1)].fg, Color::Green);
    }

    #[test]
    fn test_render_error_in_red() {
        let mut status_bar = StatusBar::default();
        status_bar.update(Message::ErrorFlashed {
            label: "Todo".to_string(),
            message: "bad index".to_string(),
        });
        let area = Rect::new(0, 0, 40, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(&status_bar, "").render(area, &mut buffer);

        assert_eq!(row(&buffer, 1).trim_end(), "[ERR: Todo] bad index");
        assert_eq!(buffer[(0, 1)].fg, Color::Red);
    }

    #[test]
    fn test_render_empty_message() {
        let status_bar = StatusBar::default();
        let area = Rect::new(0, 0, 20, 2);
        let mut buffer = Buffer::empty(area);

        StatusBarWidget::new(&status_bar, "").render(area, &mut buffer);

        assert_eq!(row(&buffer, 1).trim(), "");
    }
}
