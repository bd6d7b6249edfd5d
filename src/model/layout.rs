//! Bar geometry derived from the value sequence and the chart area.
//!
//! [`BarLayout`] is a read-only snapshot recomputed when the sequence is
//! replaced or the terminal resizes, and deliberately NOT on an in-place
//! swap: a swap changes neither the element count nor the min/max bounds,
//! so the geometry is invariant under it.

/// Horizontal padding split evenly between the two sides of the chart,
/// in columns.
pub const SIDE_PADDING: u16 = 4;

/// Rows kept clear above the tallest bar inside the chart area.
pub const TOP_PADDING: u16 = 2;

/// Derived bar geometry for the current chart area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// Columns per bar, at least 1.
    pub block_width: u16,
    /// Rows per value unit. Fractional: terminal cells are scarce, and the
    /// renderer recovers sub-cell precision with eighth-block glyphs.
    pub block_height: f64,
    /// Left offset of the first bar inside the chart area.
    pub start_x: u16,
    /// Smallest value in the sequence.
    pub min_val: u32,
    /// Largest value in the sequence.
    pub max_val: u32,
}

impl BarLayout {
    /// Compute the layout for `values` drawn into a `width` x `height` area.
    ///
    /// An all-equal sequence is a legitimate random outcome, not an error:
    /// the value range is clamped to at least 1 so the height scale never
    /// divides by zero.
    pub fn compute(values: &[u32], width: u16, height: u16) -> Self {
        let min_val = values.iter().copied().min().unwrap_or(0);
        let max_val = values.iter().copied().max().unwrap_or(0);

        let n = values.len().max(1) as f64;
        let usable_width = f64::from(width.saturating_sub(SIDE_PADDING));
        let block_width = (usable_width / n).round().max(1.0) as u16;

        let range = max_val.saturating_sub(min_val).max(1);
        let usable_height = f64::from(height.saturating_sub(TOP_PADDING));
        let block_height = usable_height / f64::from(range);

        Self {
            block_width,
            block_height,
            start_x: SIDE_PADDING / 2,
            min_val,
            max_val,
        }
    }

    /// Height of the bar for `value`, in eighths of a row.
    ///
    /// Height encodes the offset above the sequence minimum, so the
    /// smallest value draws a zero-height bar.
    pub fn bar_eighths(&self, value: u32) -> u32 {
        let units = f64::from(value.saturating_sub(self.min_val));
        (units * self.block_height * 8.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_bounds_and_start_offset() {
        let layout = BarLayout::compute(&[10, 40, 20], 64, 22);
        assert_eq!(layout.min_val, 10);
        assert_eq!(layout.max_val, 40);
        assert_eq!(layout.start_x, SIDE_PADDING / 2);
    }

    #[test]
    fn block_width_divides_usable_width_by_count() {
        // (64 - 4) / 3 = 20
        let layout = BarLayout::compute(&[1, 2, 3], 64, 22);
        assert_eq!(layout.block_width, 20);
    }

    #[test]
    fn block_width_never_collapses_to_zero() {
        let values: Vec<u32> = (0..200).collect();
        let layout = BarLayout::compute(&values, 40, 22);
        assert_eq!(layout.block_width, 1);
    }

    #[test]
    fn block_height_scales_usable_height_over_range() {
        // (22 - 2) / (40 - 0) = 0.5 rows per unit
        let layout = BarLayout::compute(&[0, 40], 64, 22);
        assert!((layout.block_height - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn all_equal_values_do_not_divide_by_zero() {
        let layout = BarLayout::compute(&[7, 7, 7, 7], 64, 22);
        assert_eq!(layout.min_val, layout.max_val);
        assert!(layout.block_height.is_finite());
        assert_eq!(layout.bar_eighths(7), 0);
    }

    #[test]
    fn layout_is_invariant_under_swap() {
        let mut values = vec![5, 30, 12, 44, 1];
        let before = BarLayout::compute(&values, 80, 24);
        values.swap(1, 3);
        let after = BarLayout::compute(&values, 80, 24);
        assert_eq!(before, after);
    }

    #[test]
    fn bar_eighths_is_monotone_in_value() {
        let layout = BarLayout::compute(&[0, 100], 80, 24);
        assert_eq!(layout.bar_eighths(0), 0);
        assert!(layout.bar_eighths(50) < layout.bar_eighths(100));
    }

    #[test]
    fn tiny_area_stays_finite() {
        let layout = BarLayout::compute(&[1, 9], 0, 0);
        assert!(layout.block_height.is_finite());
        assert_eq!(layout.block_width, 1);
        assert_eq!(layout.bar_eighths(9), 0);
    }
}
