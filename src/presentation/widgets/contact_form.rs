use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::model::{contact_form::ContactForm, editor::Editor, validation::Field};

/// Name, email and message inputs stacked vertically.
///
/// The focused field is drawn from the live editor; the others show their stored value.
pub struct ContactFormWidget<'a> {
    form: &'a ContactForm,
    focused: Field,
    editor: &'a Editor<'a>,
}

impl<'a> ContactFormWidget<'a> {
    pub fn new(form: &'a ContactForm, focused: Field, editor: &'a Editor<'a>) -> Self {
        Self {
            form,
            focused,
            editor,
        }
    }

    fn constraint(field: Field) -> Constraint {
        match field {
            Field::Message => Constraint::Min(5),
            Field::Name | Field::Email => Constraint::Length(3),
        }
    }

    fn render_field(&self, field: Field, area: Rect, buf: &mut Buffer) {
        if field == self.focused && self.editor.is_active() {
            self.editor.textarea().render(area, buf);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(field.label());
        Paragraph::new(self.form.value(field))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

impl<'a> Widget for ContactFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let areas = Layout::vertical(Field::ALL.map(Self::constraint)).split(area);
        for (field, field_area) in Field::ALL.into_iter().zip(areas.iter()) {
            self.render_field(field, *field_area, buf);
        }
    }
}
