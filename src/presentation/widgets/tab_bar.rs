use ratatui::{prelude::*, widgets::Tabs};

use crate::core::state::ui::Tab;

#[derive(Debug, Clone)]
pub struct TabBarWidget {
    active: Tab,
}

impl TabBarWidget {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    pub fn titles(&self) -> Vec<String> {
        Tab::ALL.iter().map(Tab::to_string).collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = Tabs::new(self.titles())
            .select(self.active.index())
            .style(Style::default().bg(Color::Black))
            .highlight_style(Style::default().reversed());

        tabs.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_titles_follow_tab_order() {
        let widget = TabBarWidget::new(Tab::Contact);
        assert_eq!(widget.titles(), vec!["Contact", "Carousel", "Timer", "Todo"]);
    }

    #[test]
    fn test_render_highlights_active_tab() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);
        TabBarWidget::new(Tab::Timer).render(area, &mut buffer);

        let line: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(line.contains("Contact"));
        assert!(line.contains("Todo"));

        let x = (0..area.width - 1)
            .find(|&x| buffer[(x, 0)].symbol() == "T" && buffer[(x + 1, 0)].symbol() == "i")
            .expect("timer title rendered");
        assert!(buffer[(x, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(1, 0)].modifier.contains(Modifier::REVERSED));
    }
}
