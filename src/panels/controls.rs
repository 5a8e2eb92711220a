use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::util::{control_style, panel_block, FocusId};
use crate::controller::Controls;
use crate::input::TextInput;
use crate::util::Shortcut;

/// Toggle row and selector/input/buttons row, plus borders.
pub const CONTROLS_HEIGHT: u16 = 4;

const PRIORITY_WIDTH: u16 = 12;
const ADD_WIDTH: u16 = 7;
const REMOVE_WIDTH: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, controls: &Controls, focus: FocusId) {
    let block = panel_block(" New Task ", focus != FocusId::List);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

    let checkbox = if controls.completed { "[x]" } else { "[ ]" };
    let toggle = Paragraph::new(Line::from(Span::styled(
        format!("{checkbox} Mark Completed"),
        control_style(focus == FocusId::Completed),
    )));
    frame.render_widget(toggle, rows[0]);

    let [priority_area, input_area, add_area, remove_area] = Layout::horizontal([
        Constraint::Length(PRIORITY_WIDTH),
        Constraint::Min(5),
        Constraint::Length(ADD_WIDTH),
        Constraint::Length(REMOVE_WIDTH),
    ])
    .spacing(1)
    .areas(rows[1]);

    let priority = Paragraph::new(Span::styled(
        format!("< {:<6} >", controls.priority.as_str()),
        control_style(focus == FocusId::Priority),
    ));
    frame.render_widget(priority, priority_area);

    render_input(frame, input_area, &controls.input, focus == FocusId::Input);

    frame.render_widget(
        Paragraph::new(Span::styled("[ Add ]", control_style(focus == FocusId::Add))),
        add_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            "[ Remove ]",
            control_style(focus == FocusId::Remove),
        )),
        remove_area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, input: &TextInput, focused: bool) {
    let available_width = area.width as usize;
    if available_width == 0 {
        return;
    }

    let (visible_text, cursor_col) = input_window(input, available_width);

    let style = if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray).bg(Color::Black)
    };
    frame.render_widget(Paragraph::new(visible_text).style(style), area);

    if focused && cursor_col < available_width {
        frame.set_cursor_position((area.x + cursor_col as u16, area.y));
    }
}

/// Visible part of the input for a field `width` cells wide, and the cursor
/// column inside it. Columns are display cells, so wide characters count twice.
fn input_window(input: &TextInput, width: usize) -> (String, usize) {
    let cells: Vec<(char, usize)> = input
        .text()
        .chars()
        .map(|c| (c, c.width().unwrap_or(0)))
        .collect();
    let cursor_col: usize = cells[..input.cursor()].iter().map(|&(_, w)| w).sum();

    // Scroll so the cursor cell stays inside the field
    let mut start = 0;
    let mut scroll_col = 0;
    while cursor_col + 1 > scroll_col + width && start < input.cursor() {
        scroll_col += cells[start].1;
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for &(c, w) in &cells[start..] {
        if used + w > width {
            break;
        }
        visible.push(c);
        used += w;
    }

    (visible, cursor_col - scroll_col)
}

pub fn shortcuts(focus: FocusId) -> Vec<Shortcut> {
    match focus {
        FocusId::Input => vec![
            Shortcut {
                key: "Enter",
                description: "Add Task",
            },
            Shortcut {
                key: "←/→",
                description: "Move Cursor",
            },
        ],
        FocusId::Priority => vec![Shortcut {
            key: "←/→",
            description: "Change Priority",
        }],
        FocusId::Add => vec![Shortcut {
            key: "Enter",
            description: "Add Task",
        }],
        FocusId::Remove => vec![Shortcut {
            key: "Enter",
            description: "Remove Selected",
        }],
        FocusId::Completed => vec![Shortcut {
            key: "Space",
            description: "Toggle Completed",
        }],
        FocusId::List => Vec::new(),
    }
}
