use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use super::util::{panel_block, KeyHandleResult};
use crate::style::row_style;
use crate::task_list::TaskListModel;
use crate::util::Shortcut;

#[derive(Debug, Default)]
pub struct TasksPanel;

impl TasksPanel {
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        focused: bool,
        model: &TaskListModel,
        toggle_checked: bool,
    ) {
        let block = panel_block(" To-Do List ", focused)
            .title_bottom(Line::from(" [?] Help ").right_aligned());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if model.is_empty() {
            let centered = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .split(inner)[0];
            let placeholder = Paragraph::new("(no tasks)")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, centered);
            return;
        }

        let visible_height = inner.height as usize;
        if visible_height == 0 {
            return;
        }
        let selected = model.selected();
        let offset = scroll_offset(model.len(), visible_height, selected);

        // Styles are recomputed for every row on every pass.
        let items: Vec<ListItem> = model
            .tasks()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_height)
            .map(|(i, task)| {
                let is_selected = selected == Some(i);
                let marker = if is_selected { "> " } else { "  " };
                let style = row_style(task, is_selected, toggle_checked).to_style();
                ListItem::new(Line::from(vec![Span::raw(marker), Span::raw(task.label())]))
                    .style(style)
            })
            .collect();

        frame.render_widget(List::new(items), inner);
    }

    /// Selection keys. A change is reported back rather than applied so it
    /// goes through the controller.
    pub fn handle_key(&self, key: KeyEvent, model: &TaskListModel) -> KeyHandleResult {
        let len = model.len();
        let current = model.selected();
        let target = match key.code {
            KeyCode::Down | KeyCode::Char('j') => match current {
                None if len > 0 => Some(0),
                Some(i) if i + 1 < len => Some(i + 1),
                _ => return KeyHandleResult::Consumed,
            },
            KeyCode::Up | KeyCode::Char('k') => match current {
                None if len > 0 => Some(len - 1),
                Some(i) if i > 0 => Some(i - 1),
                _ => return KeyHandleResult::Consumed,
            },
            KeyCode::Home if len > 0 => Some(0),
            KeyCode::End if len > 0 => Some(len - 1),
            KeyCode::Esc => None,
            _ => return KeyHandleResult::Ignored,
        };

        if target == current {
            KeyHandleResult::Consumed
        } else {
            KeyHandleResult::Select(target)
        }
    }

    pub fn shortcuts(&self) -> Vec<Shortcut> {
        vec![
            Shortcut {
                key: "j/k",
                description: "Select",
            },
            Shortcut {
                key: "Home/End",
                description: "First/Last",
            },
            Shortcut {
                key: "Esc",
                description: "Clear Selection",
            },
        ]
    }
}

fn scroll_offset(total: usize, visible: usize, selected: Option<usize>) -> usize {
    let Some(cursor) = selected else { return 0 };
    if visible == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(visible);
    let margin = 2usize.min(visible / 2);
    // Keep cursor at least `margin` from the bottom edge
    let min_offset = (cursor + margin + 1).saturating_sub(visible);
    // and at least `margin` from the top edge
    let max_for_cursor = cursor.saturating_sub(margin);
    min_offset.min(max_offset).min(max_for_cursor)
}
