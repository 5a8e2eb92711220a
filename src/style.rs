use ratatui::style::{Color, Style};

use crate::task::Task;

/// Named colors used for task rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub default_background: Color,
    pub selection_background: Color,
    /// Selected, completed and the completed toggle is checked.
    pub confirmed_background: Color,
    pub default_foreground: Color,
    pub done_foreground: Color,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        default_background: Color::Reset,
        selection_background: Color::Blue,
        confirmed_background: Color::LightGreen,
        default_foreground: Color::Reset,
        done_foreground: Color::Green,
    };

    /// Background depends on selection, the toggle and the completed flag;
    /// foreground depends only on the completed flag.
    pub const fn row_style(
        &self,
        task: &Task,
        is_selected: bool,
        toggle_checked: bool,
    ) -> RowStyle {
        let background = if is_selected && toggle_checked && task.completed {
            self.confirmed_background
        } else if is_selected {
            self.selection_background
        } else {
            self.default_background
        };

        let foreground = if task.completed {
            self.done_foreground
        } else {
            self.default_foreground
        };

        RowStyle {
            background,
            foreground,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Colors for one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyle {
    pub background: Color,
    pub foreground: Color,
}

impl RowStyle {
    pub fn to_style(self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }
}

/// Row colors with the default palette.
pub const fn row_style(task: &Task, is_selected: bool, toggle_checked: bool) -> RowStyle {
    Palette::DEFAULT.row_style(task, is_selected, toggle_checked)
}
