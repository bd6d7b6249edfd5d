//! Central application state.
//!
//! Every transition is a plain method with no terminal I/O, so the whole
//! control surface (reset, direction/algorithm selection, start, advance)
//! is unit-testable without a TTY.

use crate::model::layout::BarLayout;
use crate::model::sorter::{Algorithm, Direction, SortStepper, StepOutcome};
use crate::model::values::{generate_values, GenerationParams};
use rand::Rng;

/// Highlight for the pair touched by the most recent swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepHighlight {
    /// Index whose element moved back toward the start (drawn red).
    pub moved_back: usize,
    /// Index whose element moved forward toward the end (drawn green).
    pub moved_forward: usize,
}

/// Whether a sort is in progress, and its suspended cursor when it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortSession {
    /// No sort running; full idle redraws each tick.
    Idle,
    /// A sort is suspended between swaps.
    Running(SortStepper),
}

impl SortSession {
    /// Whether a sort is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, SortSession::Running(_))
    }
}

/// What [`AppState::advance_sort`] observed this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProgress {
    /// No sort was running; nothing happened.
    Idle,
    /// One swap was applied and the stepper suspended; the highlight
    /// identifies the pair for this frame's redraw.
    Suspended(StepHighlight),
    /// The stepper exhausted its cursor; the session is idle again and the
    /// sequence is fully sorted.
    Finished,
}

/// Central mutable state: the value sequence, user selections, the sort
/// session, and the derived bar layout.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// The sequence being visualized.
    pub values: Vec<u32>,
    /// Requested sort direction.
    pub direction: Direction,
    /// Selected algorithm.
    pub algorithm: Algorithm,
    /// Sort progress state.
    pub session: SortSession,
    /// Derived bar geometry for the current chart area.
    pub layout: BarLayout,
    /// Pair touched by the most recent swap; cleared when the sort ends.
    pub highlight: Option<StepHighlight>,
    /// Whether the shortcut overlay is visible.
    pub help_visible: bool,
    params: GenerationParams,
    chart_width: u16,
    chart_height: u16,
}

impl AppState {
    /// Create the initial state with a freshly drawn sequence.
    ///
    /// The layout is recomputed against the real chart area on the first
    /// draw via [`AppState::ensure_layout`].
    pub fn new(
        params: GenerationParams,
        direction: Direction,
        algorithm: Algorithm,
        rng: &mut impl Rng,
    ) -> Self {
        let values = generate_values(&params, rng);
        let layout = BarLayout::compute(&values, 0, 0);
        Self {
            values,
            direction,
            algorithm,
            session: SortSession::Idle,
            layout,
            highlight: None,
            help_visible: false,
            params,
            chart_width: 0,
            chart_height: 0,
        }
    }

    /// Recompute the layout if the chart area changed since the last draw.
    ///
    /// Called once per frame with the current chart dimensions; a no-op on
    /// the hot swap path where nothing about the geometry inputs moved.
    pub fn ensure_layout(&mut self, width: u16, height: u16) {
        if self.chart_width != width || self.chart_height != height {
            self.chart_width = width;
            self.chart_height = height;
            self.relayout();
        }
    }

    /// Regenerate the value sequence and cancel any in-progress sort.
    ///
    /// The suspended cursor is discarded without completing it; swaps it
    /// already applied are simply overwritten by the fresh sequence.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.values = generate_values(&self.params, rng);
        self.session = SortSession::Idle;
        self.highlight = None;
        self.relayout();
    }

    /// Select the sort direction. Ignored while a sort is running.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.session.is_running() {
            self.direction = direction;
        }
    }

    /// Select the algorithm. Ignored while a sort is running.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        if !self.session.is_running() {
            self.algorithm = algorithm;
        }
    }

    /// Start a sort with the current algorithm and direction.
    ///
    /// A no-op while a sort is already running.
    pub fn start_sort(&mut self) {
        if self.session.is_running() {
            return;
        }
        self.highlight = None;
        self.session = SortSession::Running(SortStepper::new(
            self.algorithm,
            self.values.len(),
            self.direction,
        ));
    }

    /// Advance the running sort by one suspension unit: step through
    /// comparisons until a swap lands or the cursor is exhausted.
    pub fn advance_sort(&mut self) -> SortProgress {
        loop {
            let outcome = match &mut self.session {
                SortSession::Idle => return SortProgress::Idle,
                SortSession::Running(stepper) => stepper.step(&mut self.values),
            };
            match outcome {
                StepOutcome::Compared { .. } => continue,
                StepOutcome::Swapped { left, right } => {
                    let highlight = StepHighlight {
                        moved_back: left,
                        moved_forward: right,
                    };
                    self.highlight = Some(highlight);
                    return SortProgress::Suspended(highlight);
                }
                StepOutcome::Done => {
                    self.session = SortSession::Idle;
                    self.highlight = None;
                    return SortProgress::Finished;
                }
            }
        }
    }

    fn relayout(&mut self) {
        self.layout = BarLayout::compute(&self.values, self.chart_width, self.chart_height);
    }
}
