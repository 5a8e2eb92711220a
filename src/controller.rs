use tracing::{debug, warn};

use crate::error::TaskError;
use crate::input::TextInput;
use crate::task::{Priority, Task};
use crate::task_list::TaskListModel;

/// A discrete user request, delivered one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    AddRequested,
    RemoveRequested,
    ToggleCompletedRequested(bool),
    SelectionChanged(Option<usize>),
}

/// What the view has to do after an action was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Nothing changed.
    Nothing,
    /// Rows were added, removed or the selection moved.
    List,
    /// Only this row changed.
    Row(usize),
    /// Nothing changed; show a blocking notification.
    Error(TaskError),
}

/// State of the input controls below the list.
#[derive(Debug, Default)]
pub struct Controls {
    pub input: TextInput,
    pub priority: Priority,
    /// The "Mark Completed" checkbox.
    pub completed: bool,
}

#[derive(Debug)]
pub struct Controller {
    pub model: TaskListModel,
    pub controls: Controls,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            model: TaskListModel::new(),
            controls: Controls::default(),
        }
    }

    pub fn dispatch(&mut self, action: UserAction) -> Render {
        debug!(?action, "dispatch");
        let result = match action {
            UserAction::AddRequested => self.add(),
            UserAction::RemoveRequested => self.model.remove().map(|_| Render::List),
            UserAction::ToggleCompletedRequested(value) => self.toggle_completed(value),
            UserAction::SelectionChanged(index) => Ok(self.select(index)),
        };

        result.unwrap_or_else(|err| {
            warn!(?action, %err, "action rejected");
            Render::Error(err)
        })
    }

    fn add(&mut self) -> Result<Render, TaskError> {
        self.model
            .add(self.controls.input.text(), self.controls.priority)?;
        self.controls.input.clear();
        Ok(Render::List)
    }

    /// The checkbox keeps the requested value even if no task is selected.
    fn toggle_completed(&mut self, value: bool) -> Result<Render, TaskError> {
        self.controls.completed = value;
        self.model.set_completed(value)?;
        Ok(self.model.selected().map_or(Render::List, Render::Row))
    }

    /// Moving the selection to any row but the last unchecks the completed
    /// toggle. Clearing the selection or selecting the last row leaves it.
    /// Re-selecting the current row is not a change.
    fn select(&mut self, index: Option<usize>) -> Render {
        let previous = self.model.selected();
        self.model.select(index);
        let Some(selected) = self.model.selected() else {
            return if previous.is_none() {
                Render::Nothing
            } else {
                Render::List
            };
        };
        if previous == Some(selected) {
            return Render::Nothing;
        }

        debug!(
            selected,
            task = self.model.get(selected).map(Task::text),
            "selection changed"
        );
        if !self.model.is_last(selected) && self.controls.completed {
            debug!(selected, "completed toggle reset");
            self.controls.completed = false;
        }
        Render::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(controller: &mut Controller, text: &str) {
        controller.controls.input.clear();
        for c in text.chars() {
            controller.controls.input.insert(c);
        }
    }

    fn add(controller: &mut Controller, text: &str, priority: Priority) -> Render {
        type_text(controller, text);
        controller.controls.priority = priority;
        controller.dispatch(UserAction::AddRequested)
    }

    fn snapshot(controller: &Controller) -> Vec<(String, Priority, bool)> {
        controller
            .model
            .tasks()
            .iter()
            .map(|t: &Task| (t.text().to_string(), t.priority(), t.completed))
            .collect()
    }

    #[test]
    fn add_trims_and_clears_input() {
        let mut controller = Controller::new();
        let render = add(&mut controller, "  Buy milk  ", Priority::High);

        assert_eq!(render, Render::List);
        assert_eq!(
            snapshot(&controller),
            [("Buy milk".to_string(), Priority::High, false)]
        );
        assert_eq!(controller.controls.input.text(), "");
    }

    #[test]
    fn add_empty_reports_error_and_keeps_input() {
        let mut controller = Controller::new();
        assert_eq!(
            add(&mut controller, "", Priority::High),
            Render::Error(TaskError::EmptyTask)
        );
        assert_eq!(
            add(&mut controller, "   ", Priority::Low),
            Render::Error(TaskError::EmptyTask)
        );
        assert!(controller.model.is_empty());
        assert_eq!(controller.controls.input.text(), "   ");
    }

    #[test]
    fn remove_without_selection_reports_error() {
        let mut controller = Controller::new();
        add(&mut controller, "a", Priority::High);

        assert_eq!(
            controller.dispatch(UserAction::RemoveRequested),
            Render::Error(TaskError::NoSelection)
        );
        assert_eq!(controller.model.len(), 1);
    }

    #[test]
    fn remove_selected_task() {
        let mut controller = Controller::new();
        for text in ["a", "b", "c"] {
            add(&mut controller, text, Priority::Medium);
        }
        controller.dispatch(UserAction::SelectionChanged(Some(0)));

        assert_eq!(controller.dispatch(UserAction::RemoveRequested), Render::List);
        let texts: Vec<String> = snapshot(&controller).into_iter().map(|t| t.0).collect();
        assert_eq!(texts, ["b", "c"]);
        assert_eq!(controller.model.selected(), None);
    }

    #[test]
    fn toggle_without_selection_keeps_checkbox_value() {
        let mut controller = Controller::new();
        add(&mut controller, "a", Priority::High);

        assert_eq!(
            controller.dispatch(UserAction::ToggleCompletedRequested(true)),
            Render::Error(TaskError::NoSelection)
        );
        assert!(controller.controls.completed);
        assert!(!controller.model.tasks()[0].completed);
    }

    #[test]
    fn toggle_updates_selected_row_only() {
        let mut controller = Controller::new();
        for text in ["a", "b", "c"] {
            add(&mut controller, text, Priority::Low);
        }
        controller.dispatch(UserAction::SelectionChanged(Some(2)));

        assert_eq!(
            controller.dispatch(UserAction::ToggleCompletedRequested(true)),
            Render::Row(2)
        );
        let flags: Vec<bool> = snapshot(&controller).into_iter().map(|t| t.2).collect();
        assert_eq!(flags, [false, false, true]);
        assert_eq!(controller.model.selected(), Some(2));
    }

    #[test]
    fn selecting_non_last_row_unchecks_toggle() {
        let mut controller = Controller::new();
        for text in ["a", "b", "c"] {
            add(&mut controller, text, Priority::High);
        }
        controller.controls.completed = true;

        controller.dispatch(UserAction::SelectionChanged(Some(1)));
        assert!(!controller.controls.completed);
    }

    #[test]
    fn selecting_last_row_or_none_keeps_toggle() {
        let mut controller = Controller::new();
        for text in ["a", "b"] {
            add(&mut controller, text, Priority::High);
        }
        controller.controls.completed = true;

        controller.dispatch(UserAction::SelectionChanged(Some(1)));
        assert!(controller.controls.completed);

        controller.dispatch(UserAction::SelectionChanged(None));
        assert!(controller.controls.completed);

        assert_eq!(
            controller.dispatch(UserAction::SelectionChanged(Some(7))),
            Render::Nothing
        );
        assert!(controller.controls.completed);
        assert_eq!(controller.model.selected(), None);
    }

    #[test]
    fn reselecting_same_row_is_not_a_change() {
        let mut controller = Controller::new();
        for text in ["a", "b", "c"] {
            add(&mut controller, text, Priority::High);
        }
        assert_eq!(
            controller.dispatch(UserAction::SelectionChanged(Some(0))),
            Render::List
        );

        // Re-checking the toggle then re-selecting row 0 leaves it checked
        controller.controls.completed = true;
        assert_eq!(
            controller.dispatch(UserAction::SelectionChanged(Some(0))),
            Render::Nothing
        );
        assert!(controller.controls.completed);

        assert_eq!(
            controller.dispatch(UserAction::SelectionChanged(None)),
            Render::List
        );
        assert_eq!(
            controller.dispatch(UserAction::SelectionChanged(None)),
            Render::Nothing
        );
    }

    #[test]
    fn wash_car_pay_bills_scenario() {
        let mut controller = Controller::new();
        add(&mut controller, "Wash car", Priority::Low);
        add(&mut controller, "Pay bills", Priority::High);
        controller.controls.completed = true;

        controller.dispatch(UserAction::SelectionChanged(Some(0)));
        assert!(!controller.controls.completed);

        assert_eq!(
            controller.dispatch(UserAction::ToggleCompletedRequested(true)),
            Render::Row(0)
        );
        assert_eq!(
            snapshot(&controller),
            [
                ("Wash car".to_string(), Priority::Low, true),
                ("Pay bills".to_string(), Priority::High, false),
            ]
        );
    }
}
