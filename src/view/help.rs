//! Help overlay listing the keyboard shortcuts.
//!
//! A centered modal toggled by '?', dismissed by 'Esc' or '?'.

use crate::view::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    // Clear whatever the chart drew underneath the overlay.
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    vec![
        Line::from(vec![Span::styled("Sequence", category_style)]),
        Line::from(vec![
            Span::styled("  r        ", key_style),
            Span::styled("Regenerate a random sequence (cancels a running sort)", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  Space    ", key_style),
            Span::styled("Start sorting", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Selection (while idle)", category_style)]),
        Line::from(vec![
            Span::styled("  a        ", key_style),
            Span::styled("Sort ascending", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  d        ", key_style),
            Span::styled("Sort descending", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  b        ", key_style),
            Span::styled("Bubble sort", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  i        ", key_style),
            Span::styled("Insertion sort", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Application", category_style)]),
        Line::from(vec![
            Span::styled("  ?        ", key_style),
            Span::styled("Toggle this overlay", desc_style),
        ]),
        Line::from(vec![
            Span::styled("  q/Esc    ", key_style),
            Span::styled("Quit (Ctrl+C always works)", desc_style),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 60, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 24);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 8);
    }

    #[test]
    fn centered_rect_handles_small_areas() {
        let area = Rect::new(0, 0, 3, 2);
        let popup = centered_rect(60, 60, area);
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }

    #[test]
    fn help_content_mentions_every_binding() {
        let text: String = build_help_content()
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.clone().into_owned())
            .collect();
        for key in ["r", "Space", "a", "d", "b", "i", "?", "q/Esc"] {
            assert!(text.contains(key), "help is missing the {key} binding");
        }
    }
}
