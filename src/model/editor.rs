use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Open the editor with `content` preloaded and the cursor at its end
    ComposingStarted {
        title: String,
        content: String,
        single_line: bool,
    },
    ComposingCanceled,
    KeyEventReceived {
        event: KeyEvent,
    },
}

/// Text input shared by the contact form fields and the todo composer
#[derive(Debug, Clone, Default)]
pub struct Editor<'a> {
    is_active: bool,
    single_line: bool,
    textarea: TextArea<'a>,
}

impl<'a> Editor<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Single-line editors swallow `Enter` instead of breaking the line
    pub fn is_single_line(&self) -> bool {
        self.single_line
    }

    pub fn textarea(&self) -> &TextArea<'_> {
        &self.textarea
    }

    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replace the buffer, keeping the block.
    ///
    /// A fresh `TextArea` is built so the undo history goes with the old text;
    /// undoing across a cleared buffer leaves the cursor past the last line.
    pub fn set_content(&mut self, content: &str) {
        let block = self.textarea.block().cloned();
        self.textarea = TextArea::from(content.split('\n'));
        if let Some(block) = block {
            self.textarea.set_block(block);
        }
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear_content(&mut self) {
        self.set_content("");
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ComposingStarted {
                title,
                content,
                single_line,
            } => {
                self.textarea
                    .set_block(Block::default().borders(Borders::ALL).title(title));
                self.set_content(&content);
                self.single_line = single_line;
                self.is_active = true;
            }
            Message::ComposingCanceled => {
                self.is_active = false;
            }
            Message::KeyEventReceived { event } => {
                if !self.is_active || (self.single_line && event.code == KeyCode::Enter) {
                    return;
                }
                self.textarea.input(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn started(content: &str, single_line: bool) -> Message {
        Message::ComposingStarted {
            title: "Test".to_string(),
            content: content.to_string(),
            single_line,
        }
    }

    fn type_str(editor: &mut Editor<'_>, text: &str) {
        for c in text.chars() {
            editor.update(Message::KeyEventReceived {
                event: key(KeyCode::Char(c)),
            });
        }
    }

    #[test]
    fn test_new_editor_is_inactive() {
        let editor = Editor::new();
        assert!(!editor.is_active());
        assert_eq!(editor.content(), "");
        assert_eq!(editor.textarea().lines().len(), 1);
    }

    #[test]
    fn test_input_ignored_while_inactive() {
        let mut editor = Editor::new();
        type_str(&mut editor, "abc");
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_started_with_content_appends_at_end() {
        let mut editor = Editor::new();
        editor.update(started("ada@", true));
        type_str(&mut editor, "b.com");

        assert!(editor.is_active());
        assert_eq!(editor.content(), "ada@b.com");
    }

    #[test]
    fn test_multiline_content_round_trips() {
        let mut editor = Editor::new();
        editor.update(started("line 1\nline 2", false));
        editor.update(Message::KeyEventReceived {
            event: key(KeyCode::Enter),
        });
        type_str(&mut editor, "line 3");

        assert_eq!(editor.content(), "line 1\nline 2\nline 3");
    }

    #[test]
    fn test_single_line_swallows_enter() {
        let mut editor = Editor::new();
        editor.update(started("", true));
        type_str(&mut editor, "a");
        editor.update(Message::KeyEventReceived {
            event: key(KeyCode::Enter),
        });
        type_str(&mut editor, "b");

        assert_eq!(editor.content(), "ab");
    }

    #[test]
    fn test_cancel_keeps_content() {
        let mut editor = Editor::new();
        editor.update(started("", false));
        type_str(&mut editor, "t");
        editor.update(Message::ComposingCanceled);

        assert!(!editor.is_active());
        assert_eq!(editor.content(), "t");
    }

    #[test]
    fn test_restart_replaces_content() {
        let mut editor = Editor::new();
        editor.update(started("", false));
        type_str(&mut editor, "old");
        editor.update(started("new", false));

        assert_eq!(editor.content(), "new");
    }

    #[test]
    fn test_clear_content() {
        let mut editor = Editor::new();
        editor.update(started("", false));
        type_str(&mut editor, "test");
        editor.clear_content();

        assert_eq!(editor.content(), "");
        assert!(editor.textarea().block().is_some());
    }

    #[test]
    fn test_undo_on_fresh_buffer_does_not_panic() {
        let mut editor = Editor::new();
        editor.update(started("", false));
        editor.update(Message::KeyEventReceived {
            event: KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        });

        assert_eq!(editor.content(), "");
        assert!(editor.is_active());
    }
}
