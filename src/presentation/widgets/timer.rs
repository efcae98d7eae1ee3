use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::timer::{State, Timer};

pub struct TimerWidget<'a> {
    timer: &'a Timer,
}

impl<'a> TimerWidget<'a> {
    pub fn new(timer: &'a Timer) -> Self {
        Self { timer }
    }

    fn state_style(&self) -> Style {
        match self.timer.state() {
            State::Running => Style::default().fg(Color::Green),
            State::Stopped => Style::default().fg(Color::Yellow),
        }
    }
}

impl<'a> Widget for TimerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL).title("Timer");
        let inner = block.inner(area);
        block.render(area, buf);

        let [clock_area, state_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(inner);

        Paragraph::new(self.timer.clock())
            .bold()
            .centered()
            .render(clock_area, buf);
        Paragraph::new(Span::styled(
            self.timer.state().to_string(),
            self.state_style(),
        ))
        .centered()
        .render(state_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_render_stopped_timer() {
        let timer = Timer::new();
        let area = Rect::new(0, 0, 20, 4);
        let mut buffer = Buffer::empty(area);

        TimerWidget::new(&timer).render(area, &mut buffer);

        assert_eq!(row(&buffer, 1).trim_matches(|c| c == '│' || c == ' '), "00:00:00");
        assert_eq!(row(&buffer, 2).trim_matches(|c| c == '│' || c == ' '), "Stopped");
    }

    #[test]
    fn test_render_running_timer() {
        let mut timer = Timer::new();
        timer.start();
        for _ in 0..3661 {
            timer.tick();
        }
        let area = Rect::new(0, 0, 20, 4);
        let mut buffer = Buffer::empty(area);

        TimerWidget::new(&timer).render(area, &mut buffer);

        assert!(row(&buffer, 1).contains("01:01:01"));
        assert!(row(&buffer, 2).contains("Running"));
    }
}
