//! Field rendering utilities for forms

use crate::state::Gender;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered input
pub const FIELD_HEIGHT: u16 = 3;
/// Rows reserved under an input for its error message
pub const ERROR_HEIGHT: u16 = 1;

const CURSOR: &str = "▌";
const MASK_CHAR: char = '•';

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn label_block(label: &str, is_active: bool, has_error: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error))
}

/// Mask a secret value, one bullet per character
pub fn mask(value: &str) -> String {
    value.chars().map(|_| MASK_CHAR).collect()
}

/// Draw a single-line text input
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    has_error: bool,
) {
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = if value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        let cursor = if is_active { CURSOR } else { "" };
        Line::from(vec![
            Span::styled(value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let paragraph = Paragraph::new(line).block(label_block(label, is_active, has_error));
    frame.render_widget(paragraph, area);
}

/// Draw a checkbox with its label
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(mark, style),
        Span::raw(" "),
        Span::styled(label, style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(is_active, false)),
    );
    frame.render_widget(paragraph, area);
}

/// Draw the gender radio group on one line
pub fn draw_radio_group(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    selected: Option<Gender>,
    cursor: Gender,
    is_active: bool,
    has_error: bool,
) {
    let mut spans = Vec::new();
    for (idx, option) in Gender::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("   "));
        }
        let mark = if selected == Some(*option) { "(•)" } else { "( )" };
        let style = if is_active && cursor == *option {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{mark} {}", option.label()), style));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(label_block(label, is_active, has_error));
    frame.render_widget(paragraph, area);
}

/// Draw the inline message under a field (nothing when the field passed)
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(paragraph, area);
    }
}
