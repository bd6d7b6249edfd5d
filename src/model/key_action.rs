//! Domain-level keyboard actions independent of key bindings.

use crate::model::sorter::{Algorithm, Direction};

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Regenerate the value sequence, recompute the layout, and cancel any
    /// running sort. Works identically whether or not a sort is running.
    /// Default: r
    Reset,

    /// Start sorting with the selected algorithm and direction. Only
    /// effective while idle; re-pressing during a sort is a no-op.
    /// Default: Space
    StartSort,

    /// Select the sort direction. Ignored while a sort is running.
    /// Defaults: a (ascending), d (descending)
    SetDirection(Direction),

    /// Select the algorithm to run. Ignored while a sort is running.
    /// Defaults: b (bubble), i (insertion)
    SelectAlgorithm(Algorithm),

    /// Toggle the keyboard-shortcut overlay. Default: ?
    ToggleHelp,

    /// Exit the application. Defaults: q, Esc (Ctrl+C always quits, even
    /// when unbound)
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_actions_carry_their_payload() {
        assert_ne!(
            KeyAction::SetDirection(Direction::Ascending),
            KeyAction::SetDirection(Direction::Descending)
        );
    }

    #[test]
    fn algorithm_actions_carry_their_payload() {
        assert_ne!(
            KeyAction::SelectAlgorithm(Algorithm::Bubble),
            KeyAction::SelectAlgorithm(Algorithm::Insertion)
        );
    }

    #[test]
    fn actions_are_copyable() {
        let action = KeyAction::StartSort;
        let copied = action;
        assert_eq!(action, copied);
    }
}
