//! Layout components (form area, status bar)

use crate::app::App;
use crate::state::{FieldId, Focus};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the form column
const FORM_WIDTH: u16 = 64;

/// Split the screen into a centered form area and the status bar line
pub fn create_layout(area: Rect, form_height: u16) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(rows[0]);
    let [form] = Layout::vertical([Constraint::Length(form_height)])
        .flex(Flex::Center)
        .areas(column);

    (form, rows[1])
}

const SUBMIT_HINT: &str = "^S:submit";

/// Keyboard hints for the focused input
fn get_focus_hints(focus: Focus) -> String {
    match focus {
        Focus::Field(FieldId::Subscribe) => format!("Space:toggle  Tab:next  {SUBMIT_HINT}"),
        Focus::Field(FieldId::Gender) => format!("←/→:choose  Tab:next  {SUBMIT_HINT}"),
        Focus::Submit => "Enter:submit  Tab:next".to_string(),
        Focus::Field(_) => format!("Tab:next  Enter/{SUBMIT_HINT}"),
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_focus_hints(app.state.focus)),
        Style::default().fg(Color::Gray),
    )];

    if !app.state.field_errors.is_empty() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("{} field(s) need attention ", app.state.field_errors.len()),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("{msg} "),
            Style::default().fg(Color::Green),
        ));
    }

    if app.state.submission_count > 0 {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("{} sent ", app.state.submission_count),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let width = quit_hint.len() as u16;
    if area.width > width {
        let quit_area = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: 1,
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_centers_form() {
        let (form, status) = create_layout(Rect::new(0, 0, 100, 41), 30);
        assert_eq!(form, Rect::new(18, 5, 64, 30));
        assert_eq!(status, Rect::new(0, 40, 100, 1));
    }

    #[test]
    fn test_layout_shrinks_on_small_terminal() {
        let (form, status) = create_layout(Rect::new(0, 0, 40, 11), 30);
        assert!(form.width <= 40);
        assert!(form.height <= 10);
        assert_eq!(status.y, 10);
    }

    #[test]
    fn test_focus_hints() {
        assert!(get_focus_hints(Focus::Field(FieldId::Subscribe)).contains("Space:toggle"));
        assert!(get_focus_hints(Focus::Field(FieldId::Gender)).contains("choose"));
        assert!(get_focus_hints(Focus::Field(FieldId::Name)).contains("^S:submit"));
        assert_eq!(get_focus_hints(Focus::Submit), "Enter:submit  Tab:next");
    }
}
