//! Bar chart widget.
//!
//! Paints every value as a vertical bar rising from the bottom of the
//! chart area: position encodes index, height encodes value. Heights are
//! measured in eighths of a row so adjacent values stay distinguishable
//! even when the terminal has far fewer rows than the value range.

use crate::model::layout::BarLayout;
use crate::state::StepHighlight;
use crate::view::styles::BarStyles;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::bar;
use ratatui::widgets::Widget;

/// Partial-row glyphs ordered by eighths of coverage (1 through 8).
const EIGHTH_GLYPHS: [&str; 8] = [
    bar::ONE_EIGHTH,
    bar::ONE_QUARTER,
    bar::THREE_EIGHTHS,
    bar::HALF,
    bar::FIVE_EIGHTHS,
    bar::THREE_QUARTERS,
    bar::SEVEN_EIGHTHS,
    bar::FULL,
];

/// One frame's bar chart over the value sequence.
pub struct BarChartWidget<'a> {
    values: &'a [u32],
    layout: &'a BarLayout,
    styles: &'a BarStyles,
    highlight: Option<StepHighlight>,
}

impl<'a> BarChartWidget<'a> {
    /// Bundle the sequence, its layout snapshot, the styles, and the
    /// optional swap highlight for rendering.
    pub fn new(
        values: &'a [u32],
        layout: &'a BarLayout,
        styles: &'a BarStyles,
        highlight: Option<StepHighlight>,
    ) -> Self {
        Self {
            values,
            layout,
            styles,
            highlight,
        }
    }
}

impl Widget for BarChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bottom = area.y + area.height - 1;
        for (index, &value) in self.values.iter().enumerate() {
            let offset = self.layout.start_x
                + (index as u16).saturating_mul(self.layout.block_width);
            let x0 = area.x.saturating_add(offset);
            if x0 >= area.right() {
                break; // remaining bars fall outside the area
            }

            let style = self.styles.style_for_bar(index, self.highlight);
            let eighths = self
                .layout
                .bar_eighths(value)
                .min(u32::from(area.height) * 8);
            let full_rows = (eighths / 8) as u16;
            let remainder = (eighths % 8) as usize;

            for col in 0..self.layout.block_width {
                let x = match x0.checked_add(col) {
                    Some(x) if x < area.right() => x,
                    _ => break,
                };
                for row in 0..full_rows {
                    buf[(x, bottom - row)].set_symbol(bar::FULL).set_style(style);
                }
                if remainder > 0 && full_rows < area.height {
                    buf[(x, bottom - full_rows)]
                        .set_symbol(EIGHTH_GLYPHS[remainder - 1])
                        .set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;
    use ratatui::style::{Color, Style};

    fn render_into(values: &[u32], width: u16, height: u16) -> (Buffer, BarLayout) {
        let layout = BarLayout::compute(values, width, height);
        let styles = BarStyles::new();
        let widget = BarChartWidget::new(values, &layout, &styles, None);
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (buf, layout)
    }

    #[test]
    fn empty_area_renders_nothing() {
        let layout = BarLayout::compute(&[1, 2, 3], 10, 10);
        let styles = BarStyles::new();
        let widget = BarChartWidget::new(&[1, 2, 3], &layout, &styles, None);
        let mut buf = Buffer::empty(Rect::new(0, 0, 0, 0));
        widget.render(Rect::new(0, 0, 0, 0), &mut buf);
    }

    #[test]
    fn tallest_bar_reaches_above_mid_height() {
        // Two values spanning the full range: max fills the usable height.
        let (buf, layout) = render_into(&[0, 100], 24, 12);
        let max_x = layout.start_x + layout.block_width;
        let cell = &buf[(max_x, 11)];
        assert_eq!(cell.symbol(), bar::FULL, "bottom row of the max bar");
        let cell = &buf[(max_x, 6)];
        assert_eq!(cell.symbol(), bar::FULL, "max bar crosses mid height");
    }

    #[test]
    fn minimum_value_bar_is_empty() {
        let (buf, layout) = render_into(&[0, 100], 24, 12);
        let min_x = layout.start_x;
        // Height encodes offset above the minimum, so the min bar draws
        // no cells at all.
        for y in 0..12 {
            assert_eq!(buf[(min_x, y)].symbol(), " ");
        }
    }

    #[test]
    fn all_equal_values_render_without_panicking() {
        let (buf, _) = render_into(&[7, 7, 7, 7], 20, 10);
        // Zero range clamps to 1 and every bar has zero height.
        for x in 0..20 {
            assert_eq!(buf[(x, 9)].symbol(), " ");
        }
    }

    #[test]
    fn bars_outside_the_area_are_clipped() {
        // 100 unit-width bars in a 10-column area: no panic, bars beyond
        // the right edge are skipped.
        let values: Vec<u32> = (0..100).map(|i| i % 50 + 1).collect();
        let (_buf, layout) = render_into(&values, 10, 8);
        assert_eq!(layout.block_width, 1);
    }

    #[test]
    fn highlight_paints_the_swapped_pair() {
        let values = [10u32, 60, 30];
        let layout = BarLayout::compute(&values, 20, 12);
        let styles = BarStyles::with_color_config(ColorConfig::from_env_and_args(false));
        let highlight = Some(StepHighlight {
            moved_back: 1,
            moved_forward: 2,
        });
        let widget = BarChartWidget::new(&values, &layout, &styles, highlight);
        let area = Rect::new(0, 0, 20, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        if std::env::var("NO_COLOR").is_ok() {
            return; // styles collapse to default; nothing to assert
        }
        let back_x = layout.start_x + layout.block_width;
        let forward_x = layout.start_x + 2 * layout.block_width;
        assert_eq!(
            buf[(back_x, 11)].style(),
            Style::default().fg(Color::Red),
            "moved-back bar is red"
        );
        assert_eq!(
            buf[(forward_x, 11)].style(),
            Style::default().fg(Color::Green),
            "moved-forward bar is green"
        );
    }
}
