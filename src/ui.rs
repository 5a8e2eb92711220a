use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::overlays::{render_error_overlay, render_help_overlay};
use crate::panels::{controls, FocusId, CONTROLS_HEIGHT};

pub struct AppLayout {
    pub list: Rect,
    pub controls: Rect,
}

/// Task list fills the window; the control strip sits along the bottom.
pub fn create_layout(area: Rect) -> AppLayout {
    let [list, controls] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(CONTROLS_HEIGHT)]).areas(area);
    AppLayout { list, controls }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = create_layout(frame.area());
    let controller = &app.controller;

    app.tasks_panel.render(
        frame,
        layout.list,
        app.focused == FocusId::List,
        &controller.model,
        controller.controls.completed,
    );
    controls::render(frame, layout.controls, &controller.controls, app.focused);

    if let Some(error) = app.error {
        render_error_overlay(frame, error);
    } else if app.help_visible {
        render_help_overlay(frame, app.focused.name(), &app.focused_shortcuts());
    }
}
