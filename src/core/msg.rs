use serde::{Deserialize, Serialize};

pub mod system;
pub mod ui;

use crate::model::{carousel, contact_form, timer, todo_list};
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages consumed by [`crate::core::update::update`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Ui(UiMsg),

    ContactForm(contact_form::Message),
    Carousel(carousel::Message),
    Timer(timer::Message),
    Todo(todo_list::Message),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Timer(timer::Message::Ticked))
    }
}
