use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::util::{centered_rect, render_overlay_frame};
use crate::error::TaskError;

const OVERLAY_WIDTH: u16 = 36;

/// Blocking notification for a rejected action.
pub fn render_error_overlay(frame: &mut Frame, error: TaskError) {
    let message = error.to_string();
    let inner_width = OVERLAY_WIDTH.saturating_sub(6) as usize;
    let msg_lines = message.chars().count().div_ceil(inner_width.max(1)).max(1);

    // pad, message, pad, hint, pad + borders
    let content_height = (msg_lines + 4) as u16 + 2;
    let overlay_height = content_height.min(frame.area().height);

    let overlay_area = centered_rect(frame.area(), OVERLAY_WIDTH, overlay_height);
    let inner = render_overlay_frame(frame, overlay_area, " Error ", Color::Red);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(msg_lines as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let msg = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: true });
    frame.render_widget(msg, indent(rows[1]));

    let hint = Paragraph::new(Span::styled(
        "Press any key to dismiss",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hint, indent(rows[3]));
}

fn indent(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    }
}
