use serde::{Deserialize, Serialize};

use crate::model::IndexOutOfRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    TaskAdded { text: String },
    DoneToggled { index: usize },
    TaskRemoved { index: usize },
}

/// What `add_task` does with empty or whitespace-only text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlankTaskPolicy {
    /// Ignore the task
    #[default]
    Reject,
    /// Store the text as given
    Accept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    text: String,
    done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

/// Tasks in insertion order. Indices are positional and shift on removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<Task>,
    policy: BlankTaskPolicy,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BlankTaskPolicy) -> Self {
        Self {
            tasks: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> BlankTaskPolicy {
        self.policy
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Append a task and return its index.
    ///
    /// Returns `None` when blank text is rejected by the list's policy.
    pub fn add_task(&mut self, text: impl Into<String>) -> Option<usize> {
        let text = text.into();
        if self.policy == BlankTaskPolicy::Reject && text.trim().is_empty() {
            return None;
        }
        self.tasks.push(Task::new(text));
        Some(self.tasks.len() - 1)
    }

    /// Flip the done flag and return the new value
    pub fn toggle_done(&mut self, index: usize) -> Result<bool, IndexOutOfRange> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(IndexOutOfRange::new(index, len))?;
        task.done = !task.done;
        Ok(task.done)
    }

    /// Remove the task, shifting later tasks left by one
    pub fn remove_task(&mut self, index: usize) -> Result<Task, IndexOutOfRange> {
        if index >= self.tasks.len() {
            return Err(IndexOutOfRange::new(index, self.tasks.len()));
        }
        Ok(self.tasks.remove(index))
    }

    pub fn update(&mut self, message: Message) -> Result<(), IndexOutOfRange> {
        match message {
            Message::TaskAdded { text } => {
                self.add_task(text);
            }
            Message::DoneToggled { index } => {
                self.toggle_done(index)?;
            }
            Message::TaskRemoved { index } => {
                self.remove_task(index)?;
            }
        }
        Ok(())
    }
}
