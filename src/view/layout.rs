//! Frame composition.
//!
//! Splits the terminal into the caption header, the chart area, and the
//! status bar, and renders each region from the current state.

use crate::state::AppState;
use crate::view::bars::BarChartWidget;
use crate::view::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::help::render_help_overlay;
use crate::view::styles::BarStyles;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render one full frame: header, bars, status bar, and the help overlay
/// when visible.
///
/// The caller refreshes the layout snapshot (via
/// [`AppState::ensure_layout`]) before drawing; rendering itself never
/// recomputes geometry.
pub fn render_frame(frame: &mut Frame, state: &AppState, styles: &BarStyles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], styles);
    frame.render_widget(
        BarChartWidget::new(&state.values, &state.layout, styles, state.highlight),
        chunks[1],
    );
    render_status_bar(frame, chunks[2], state, styles);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

/// Chart area height for a terminal of `total_height` rows.
///
/// Kept next to the layout split so the pre-draw geometry derivation in the
/// main loop cannot drift from the constraints above.
pub fn chart_height(total_height: u16) -> u16 {
    total_height.saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT)
}

fn render_header(frame: &mut Frame, area: Rect, styles: &BarStyles) {
    let caption = Paragraph::new(vec![
        Line::from("R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending"),
        Line::from("B - Bubble Sort | I - Insertion Sort | ? - Help | Q - Quit"),
    ])
    .style(styles.text())
    .alignment(Alignment::Center);
    frame.render_widget(caption, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &BarStyles) {
    let (activity, style) = if state.session.is_running() {
        ("sorting", styles.active_text())
    } else {
        ("idle", styles.text())
    };
    let status = format!(
        " {} | {} | {}",
        state.algorithm.label(),
        state.direction.label(),
        activity
    );
    frame.render_widget(Paragraph::new(Line::from(status)).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_height_reserves_header_and_status() {
        assert_eq!(chart_height(24), 24 - HEADER_HEIGHT - STATUS_BAR_HEIGHT);
    }

    #[test]
    fn chart_height_saturates_on_tiny_terminals() {
        assert_eq!(chart_height(1), 0);
        assert_eq!(chart_height(0), 0);
    }
}
