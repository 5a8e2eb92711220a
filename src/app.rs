use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::controller::{Controller, Render, UserAction};
use crate::error::TaskError;
use crate::panels::{controls, FocusId, KeyHandleResult, TasksPanel};
use crate::util::Shortcut;

pub struct App {
    pub should_quit: bool,
    pub controller: Controller,
    pub tasks_panel: TasksPanel,
    pub focused: FocusId,
    /// Blocking notification; the next key only dismisses it.
    pub error: Option<TaskError>,
    pub help_visible: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            should_quit: false,
            controller: Controller::new(),
            tasks_panel: TasksPanel::default(),
            focused: FocusId::Input,
            error: None,
            help_visible: false,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(error) = self.error.take() {
            debug!(%error, "error dismissed");
            return;
        }

        if self.help_visible {
            self.help_visible = false;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.focus_previous();
                } else {
                    self.focus_next();
                }
                return;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return;
            }
            // Plain characters belong to the text input while it has focus
            KeyCode::Char('q') if self.focused != FocusId::Input => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') if self.focused != FocusId::Input => {
                self.help_visible = true;
                return;
            }
            _ => {}
        }

        match self.focused {
            FocusId::Input => self.handle_input_key(key),
            FocusId::Priority => self.handle_priority_key(key),
            FocusId::Add => {
                if is_activate(key) {
                    self.dispatch(UserAction::AddRequested);
                }
            }
            FocusId::Remove => {
                if is_activate(key) {
                    self.dispatch(UserAction::RemoveRequested);
                }
            }
            FocusId::Completed => {
                if is_activate(key) {
                    let value = !self.controller.controls.completed;
                    self.dispatch(UserAction::ToggleCompletedRequested(value));
                }
            }
            FocusId::List => {
                let result = self
                    .tasks_panel
                    .handle_key(key, &self.controller.model);
                if let KeyHandleResult::Select(index) = result {
                    self.dispatch(UserAction::SelectionChanged(index));
                }
            }
        }
    }

    /// Run an action through the controller and surface any rejection.
    pub fn dispatch(&mut self, action: UserAction) -> Render {
        let render = self.controller.dispatch(action);
        match render {
            Render::Error(error) => self.error = Some(error),
            Render::Row(index) => debug!(index, "row redraw"),
            Render::List | Render::Nothing => {}
        }
        render
    }

    pub fn focused_shortcuts(&self) -> Vec<Shortcut> {
        match self.focused {
            FocusId::List => self.tasks_panel.shortcuts(),
            other => controls::shortcuts(other),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.dispatch(UserAction::AddRequested);
            return;
        }

        let input = &mut self.controller.controls.input;
        match key.code {
            KeyCode::Char(c) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }

    fn handle_priority_key(&mut self, key: KeyEvent) {
        let priority = &mut self.controller.controls.priority;
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => *priority = priority.previous(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | ' ') => {
                *priority = priority.next();
            }
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        let all = FocusId::all();
        let current = all.iter().position(|&f| f == self.focused).unwrap_or(0);
        self.focused = all[(current + 1) % all.len()];
    }

    fn focus_previous(&mut self) {
        let all = FocusId::all();
        let current = all.iter().position(|&f| f == self.focused).unwrap_or(0);
        self.focused = all[(current + all.len() - 1) % all.len()];
    }
}

fn is_activate(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}
