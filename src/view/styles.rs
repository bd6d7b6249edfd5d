//! Bar and text styling configuration.
//!
//! The bar palette cycles three gray shades by `index mod 3`; the two
//! indices of the most recent swap override the palette with green (moved
//! forward) and red (moved back).

use crate::state::StepHighlight;
use ratatui::style::{Color, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or by setting the
/// `NO_COLOR` environment variable to any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the CLI flag and the environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== BarStyles =====

/// Styles for bars, highlights, and caption text.
#[derive(Debug, Clone)]
pub struct BarStyles {
    palette: [Style; 3],
    moved_forward: Style,
    moved_back: Style,
    text: Style,
    active_text: Style,
}

impl BarStyles {
    /// Create styles with the default color configuration.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles honoring the given color configuration.
    ///
    /// With colors disabled every style is the terminal default; the bars
    /// remain legible because position and height carry the information.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                palette: [
                    Style::default().fg(Color::Rgb(128, 128, 128)),
                    Style::default().fg(Color::Rgb(160, 160, 160)),
                    Style::default().fg(Color::Rgb(192, 192, 192)),
                ],
                moved_forward: Style::default().fg(Color::Green),
                moved_back: Style::default().fg(Color::Red),
                text: Style::default().fg(Color::Gray),
                active_text: Style::default().fg(Color::Green),
            }
        } else {
            Self {
                palette: [Style::default(); 3],
                moved_forward: Style::default(),
                moved_back: Style::default(),
                text: Style::default(),
                active_text: Style::default(),
            }
        }
    }

    /// Style for the bar at `index`, honoring the swap highlight.
    pub fn style_for_bar(&self, index: usize, highlight: Option<StepHighlight>) -> Style {
        if let Some(highlight) = highlight {
            if index == highlight.moved_forward {
                return self.moved_forward;
            }
            if index == highlight.moved_back {
                return self.moved_back;
            }
        }
        self.palette[index % 3]
    }

    /// Style for caption and status text.
    pub fn text(&self) -> Style {
        self.text
    }

    /// Style for the status bar while a sort is running.
    pub fn active_text(&self) -> Style {
        self.active_text
    }
}

impl Default for BarStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> BarStyles {
        BarStyles::with_color_config(ColorConfig { enabled: true })
    }

    #[test]
    fn palette_cycles_every_three_bars() {
        let styles = enabled();
        assert_eq!(styles.style_for_bar(0, None), styles.style_for_bar(3, None));
        assert_eq!(styles.style_for_bar(1, None), styles.style_for_bar(4, None));
        assert_ne!(styles.style_for_bar(0, None), styles.style_for_bar(1, None));
    }

    #[test]
    fn highlight_overrides_palette() {
        let styles = enabled();
        let highlight = Some(StepHighlight {
            moved_back: 2,
            moved_forward: 3,
        });
        assert_eq!(
            styles.style_for_bar(3, highlight),
            Style::default().fg(Color::Green)
        );
        assert_eq!(
            styles.style_for_bar(2, highlight),
            Style::default().fg(Color::Red)
        );
        // Other bars keep the palette.
        assert_eq!(styles.style_for_bar(0, highlight), styles.style_for_bar(0, None));
    }

    #[test]
    fn disabled_colors_use_default_styles() {
        let styles = BarStyles::with_color_config(ColorConfig { enabled: false });
        assert_eq!(styles.style_for_bar(0, None), Style::default());
        assert_eq!(
            styles.style_for_bar(
                1,
                Some(StepHighlight {
                    moved_back: 0,
                    moved_forward: 1
                })
            ),
            Style::default()
        );
        assert_eq!(styles.text(), Style::default());
    }
}
