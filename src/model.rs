//! Widget models
//!
//! Each model is a plain value type: it holds its own state, exposes one method
//! per operation plus a `Message`-driven `update`, and reports what happened
//! through return values. None of them render or schedule anything.

use std::error::Error;
use std::fmt;

pub mod carousel;
pub mod contact_form;
pub mod editor;
pub mod status_bar;
pub mod timer;
pub mod todo_list;
pub mod validation;

/// An operation addressed an index that does not exist.
///
/// `len == 0` means the collection was empty, which is how an advance on an
/// empty carousel is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    pub fn new(index: usize, len: usize) -> Self {
        Self { index, len }
    }
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            write!(f, "index {} is out of range: collection is empty", self.index)
        } else {
            write!(
                f,
                "index {} is out of range for {} entries",
                self.index, self.len
            )
        }
    }
}

impl Error for IndexOutOfRange {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        assert_eq!(
            IndexOutOfRange::new(3, 2).to_string(),
            "index 3 is out of range for 2 entries"
        );
        assert_eq!(
            IndexOutOfRange::new(0, 0).to_string(),
            "index 0 is out of range: collection is empty"
        );
    }
}
