use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::carousel::Carousel;

pub struct CarouselWidget<'a> {
    carousel: &'a Carousel,
    base_path: &'a str,
}

impl<'a> CarouselWidget<'a> {
    pub fn new(carousel: &'a Carousel, base_path: &'a str) -> Self {
        Self {
            carousel,
            base_path,
        }
    }

    /// Full path of the image on display
    pub fn image_path(&self) -> Option<String> {
        self.carousel
            .current()
            .map(|image| format!("{}{image}", self.base_path))
    }

    /// 1-based position, e.g. `2/3`
    pub fn position(&self) -> String {
        if self.carousel.is_empty() {
            return "0/0".to_string();
        }
        format!(
            "{}/{}",
            self.carousel.current_index() + 1,
            self.carousel.len()
        )
    }
}

impl<'a> Widget for CarouselWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Image")
            .title_bottom(Line::from(self.position()).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        let text = match self.image_path() {
            Some(path) => Line::from(path).bold(),
            None => Line::from("No images").italic().fg(Color::DarkGray),
        };
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        Paragraph::new(text).centered().render(row, buf);
    }
}
