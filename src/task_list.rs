use tracing::debug;

use crate::error::TaskError;
use crate::task::{Priority, Task};

/// Position of a task in the list, as returned by [`TaskListModel::add`].
pub type TaskId = usize;

/// Ordered task list plus the single selection that remove and
/// set-completed act on.
#[derive(Debug, Default)]
pub struct TaskListModel {
    tasks: Vec<Task>,
    selected: Option<usize>,
}

impl TaskListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. The text is trimmed; empty text is rejected without
    /// touching the list.
    pub fn add(&mut self, text: &str, priority: Priority) -> Result<TaskId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyTask);
        }
        self.tasks.push(Task::new(text.to_string(), priority));
        let id = self.tasks.len() - 1;
        debug!(id, %priority, "task added");
        Ok(id)
    }

    /// Delete the selected task. Later tasks shift down by one and the
    /// selection collapses to none.
    pub fn remove(&mut self) -> Result<Task, TaskError> {
        let index = self.selected.ok_or(TaskError::NoSelection)?;
        let task = self.tasks.remove(index);
        self.selected = None;
        debug!(index, remaining = self.tasks.len(), "task removed");
        Ok(task)
    }

    /// Set the completed flag of the selected task in place.
    pub fn set_completed(&mut self, value: bool) -> Result<(), TaskError> {
        let index = self.selected.ok_or(TaskError::NoSelection)?;
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::NoSelection)?;
        task.completed = value;
        debug!(index, completed = value, "task completion updated");
        Ok(())
    }

    /// Track a new selection. Out-of-range indices are stored as none.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.tasks.len());
    }

    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.tasks.len()
    }
}
