//! Reusable widgets
//!
//! Each widget borrows the model it draws and renders straight into a buffer.

pub mod carousel;
pub mod contact_form;
pub mod status_bar;
pub mod tab_bar;
pub mod timer;
pub mod todo_list;

pub use carousel::CarouselWidget;
pub use contact_form::ContactFormWidget;
pub use status_bar::StatusBarWidget;
pub use tab_bar::TabBarWidget;
pub use timer::TimerWidget;
pub use todo_list::TodoListWidget;
