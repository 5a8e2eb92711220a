use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// Style for a one-line control, highlighted while it has focus.
pub fn control_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandleResult {
    Consumed,
    Ignored,
    Select(Option<usize>),
}

/// Widgets that can hold keyboard focus, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusId {
    Input,
    Priority,
    Add,
    Remove,
    Completed,
    List,
}

impl FocusId {
    pub const fn all() -> [Self; 6] {
        [
            Self::Input,
            Self::Priority,
            Self::Add,
            Self::Remove,
            Self::Completed,
            Self::List,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "Task Input",
            Self::Priority => "Priority",
            Self::Add => "Add",
            Self::Remove => "Remove",
            Self::Completed => "Mark Completed",
            Self::List => "Task List",
        }
    }
}
