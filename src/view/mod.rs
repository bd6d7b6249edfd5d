//! TUI rendering and terminal management (impure shell).
//!
//! Everything that touches the terminal lives here: raw-mode setup, the
//! fixed-rate frame loop, key dispatch, and teardown. All decisions the
//! loop makes are delegated to the pure [`AppState`] methods so they stay
//! testable without a TTY.

mod bars;
pub mod constants;
mod help;
mod layout;
mod styles;

pub use bars::BarChartWidget;
pub use help::render_help_overlay;
pub use styles::{BarStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::key_action::KeyAction;
use crate::model::values::GenerationParams;
use crate::state::{AppState, SortProgress};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations.
///
/// All of them are fatal: a visual tool has no degraded mode to fall back
/// to, so the error propagates out and the process exits after the
/// terminal is restored.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with
/// `ratatui::backend::TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: BarStyles,
    rng: StdRng,
    tick_interval: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Puts the terminal into raw mode on the alternate screen and draws
    /// the initial sequence. `seed` makes the run reproducible; without it
    /// the sequence differs every launch.
    pub fn new(
        config: &ResolvedConfig,
        params: GenerationParams,
        seed: Option<u64>,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let app_state = AppState::new(params, config.direction, config.algorithm, &mut rng);

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: BarStyles::with_color_config(colors),
            rng,
            tick_interval: Duration::from_micros(1_000_000 / u64::from(config.tick_rate.max(1))),
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main frame loop.
    ///
    /// Each tick: advance the running sort by one suspension unit (the step
    /// already determines this frame's highlight), draw, then drain pending
    /// input events for the remainder of the tick — the `event::poll`
    /// timeout doubles as the frame-rate cap. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let frame_start = Instant::now();

            if self.app_state.session.is_running() {
                if self.app_state.advance_sort() == SortProgress::Finished {
                    info!(algorithm = self.app_state.algorithm.label(), "sort complete");
                }
            }

            self.draw()?;

            // Drain input until the tick deadline. A burst of events cannot
            // starve the frame clock: the elapsed check breaks out.
            loop {
                let timeout = self.tick_interval.saturating_sub(frame_start.elapsed());
                if !event::poll(timeout)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        // The next draw recomputes the layout from the new
                        // frame size; nothing to store here.
                        debug!(width, height, "terminal resized");
                    }
                    _ => {}
                }
                if frame_start.elapsed() >= self.tick_interval {
                    break;
                }
            }
        }
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in the bindings.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Esc closes the help overlay before the binding dispatch would
        // interpret it as quit.
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false; // unmapped keys are silently ignored
        };

        // The overlay swallows everything except its own toggle and quit.
        if self.app_state.help_visible
            && !matches!(action, KeyAction::ToggleHelp | KeyAction::Quit)
        {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Reset => {
                debug!("reset requested");
                self.app_state.reset(&mut self.rng);
            }
            KeyAction::StartSort => self.app_state.start_sort(),
            KeyAction::SetDirection(direction) => self.app_state.set_direction(direction),
            KeyAction::SelectAlgorithm(algorithm) => self.app_state.select_algorithm(algorithm),
            KeyAction::ToggleHelp => self.app_state.help_visible = !self.app_state.help_visible,
        }

        false
    }

    /// Render the current frame.
    ///
    /// Refreshes the cached layout snapshot against the current chart area
    /// first; an unchanged area (the common case while stepping) reuses it.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.app_state
            .ensure_layout(size.width.max(1), layout::chart_height(size.height));

        let Self {
            terminal,
            app_state,
            styles,
            ..
        } = self;
        terminal.draw(|frame| layout::render_frame(frame, app_state, styles))?;

        Ok(())
    }
}

/// Restore the terminal to cooked mode on the main screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Initialize the terminal, run the visualizer, and restore the terminal
/// even when the run fails.
pub fn run_with_config(
    config: &ResolvedConfig,
    params: GenerationParams,
    seed: Option<u64>,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(config, params, seed, colors)?;

    let result = app.run();

    // Always restore terminal state before surfacing the result.
    restore_terminal()?;

    result
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Construct a TuiApp over an arbitrary backend without touching the
    /// real terminal. Test-only.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: BarStyles::new(),
            rng: StdRng::seed_from_u64(0),
            tick_interval: Duration::from_micros(1_000_000 / 60),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn draw_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }
}
