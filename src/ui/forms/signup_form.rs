//! Sign-up form rendering

use super::field_renderer::{
    draw_checkbox, draw_field_error, draw_radio_group, draw_text_field, mask, ERROR_HEIGHT,
    FIELD_HEIGHT,
};
use crate::app::App;
use crate::state::{FieldId, Focus, TextField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Total rows the form needs, borders included
pub const FORM_HEIGHT: u16 = 4 * (FIELD_HEIGHT + ERROR_HEIGHT) + FIELD_HEIGHT + BUTTON_HEIGHT + 2;

/// Draw the sign-up form
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(ERROR_HEIGHT),  // Name error
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(ERROR_HEIGHT),  // Email error
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(ERROR_HEIGHT),  // Password error
            Constraint::Length(FIELD_HEIGHT),  // Subscribe
            Constraint::Length(FIELD_HEIGHT),  // Gender
            Constraint::Length(ERROR_HEIGHT),  // Gender error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let state = &app.state;
    let errors = &state.field_errors;

    let text_fields = [
        (TextField::Name, chunks[0], chunks[1]),
        (TextField::Email, chunks[2], chunks[3]),
        (TextField::Password, chunks[4], chunks[5]),
    ];
    for (field, field_area, error_area) in text_fields {
        let id = field.field_id();
        let value = state.text(field);
        let shown = if field == TextField::Password && app.config.mask_password() {
            mask(value)
        } else {
            value.to_string()
        };
        let error = errors.get(id);
        draw_text_field(
            frame,
            field_area,
            id.label(),
            &shown,
            state.focus.is_field(id),
            error.is_some(),
        );
        draw_field_error(frame, error_area, error);
    }

    draw_checkbox(
        frame,
        chunks[6],
        FieldId::Subscribe.label(),
        state.form.subscribe,
        state.focus.is_field(FieldId::Subscribe),
    );

    let gender_error = errors.get(FieldId::Gender);
    draw_radio_group(
        frame,
        chunks[7],
        FieldId::Gender.label(),
        state.form.gender,
        state.gender_cursor,
        state.focus.is_field(FieldId::Gender),
        gender_error.is_some(),
    );
    draw_field_error(frame, chunks[8], gender_error);

    render_button(frame, chunks[9], "Submit", state.focus == Focus::Submit);
}
