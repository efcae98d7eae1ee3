use std::{collections::VecDeque, future::Future, pin::Pin};

use color_eyre::eyre::Result;
use futures::future;
use ratatui::{backend::TestBackend, prelude::*};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Terminal backed by `TestBackend` that replays a scripted event queue.
///
/// `next()` resolves immediately and yields `None` once the queue is drained.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let term = Terminal::new(TestBackend::new(width, height))?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as one string per row
    pub fn rows(&self) -> Vec<String> {
        let buffer = self.buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width.max(1))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.exit()
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(future::ready(self.events.pop_front()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_replays_events_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Init, Event::Tick])?;
        assert_eq!(tui.next().await, Some(Event::Init));
        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_draw_counts_and_captures() -> Result<()> {
        let mut tui = TestTui::new(5, 1)?;
        tui.draw(&mut |frame: &mut Frame<'_>| {
            frame.render_widget(Span::raw("hello"), frame.area());
        })?;

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.rows(), vec!["hello".to_string()]);
        Ok(())
    }

    #[test]
    fn test_resize() -> Result<()> {
        let mut tui = TestTui::new(5, 1)?;
        tui.resize(Rect::new(0, 0, 8, 2))?;
        assert_eq!(tui.buffer().area.width, 8);
        Ok(())
    }
}
