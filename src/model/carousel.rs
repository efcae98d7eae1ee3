use serde::{Deserialize, Serialize};

use crate::model::IndexOutOfRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Next,
    Previous,
}

/// Ordered image identifiers with a cyclic cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<String>,
    current_index: usize,
}

impl Carousel {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            current_index: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Identifier under the cursor, or `None` when there are no images
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn next(&mut self) -> Result<usize, IndexOutOfRange> {
        let len = self.checked_len()?;
        self.current_index = (self.current_index + 1) % len;
        Ok(self.current_index)
    }

    pub fn previous(&mut self) -> Result<usize, IndexOutOfRange> {
        let len = self.checked_len()?;
        self.current_index = (self.current_index + len - 1) % len;
        Ok(self.current_index)
    }

    fn checked_len(&self) -> Result<usize, IndexOutOfRange> {
        match self.images.len() {
            0 => Err(IndexOutOfRange::new(self.current_index, 0)),
            len => Ok(len),
        }
    }

    pub fn update(&mut self, message: Message) -> Result<usize, IndexOutOfRange> {
        match message {
            Message::Next => self.next(),
            Message::Previous => self.previous(),
        }
    }
}
