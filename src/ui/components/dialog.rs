//! Modal error dialog

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

const DIALOG_MAX_WIDTH: u16 = 60;

/// Rectangle of `width` x `height` centered in `area`, clipped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows a message needs when wrapped at `width` columns
fn wrapped_height(message: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    message
        .split('\n')
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum::<usize>()
        .try_into()
        .unwrap_or(u16::MAX)
}

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key),
        Span::raw(" or "),
        Span::styled("Esc", key),
        Span::raw(" to dismiss"),
    ]);

    // 2 borders + 2 columns padding each side
    let text_width = DIALOG_MAX_WIDTH - 6;
    let height = wrapped_height(message, text_width).saturating_add(4);
    let area = centered_rect(frame.area(), DIALOG_MAX_WIDTH, height);

    let mut content: Vec<Line> = message.split('\n').map(Line::from).collect();
    content.push(Line::from(""));
    content.push(hint);

    let block = Block::default()
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_in_middle() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 10);
        assert_eq!(rect, Rect::new(20, 15, 60, 10));
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 30, 5);
        let rect = centered_rect(area, 60, 10);
        assert_eq!(rect, Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("short", 54), 1);
        assert_eq!(wrapped_height(&"x".repeat(55), 54), 2);
        assert_eq!(wrapped_height("a\nb", 54), 2);
        assert_eq!(wrapped_height("", 54), 1);
    }
}
