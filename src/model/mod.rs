//! Domain types: value sequences, step-sorters, layout math (pure core).

pub mod error;
pub mod key_action;
pub mod layout;
pub mod sorter;
pub mod values;

pub use error::GenerateError;
pub use key_action::KeyAction;
pub use layout::BarLayout;
pub use sorter::{Algorithm, Direction, SortStepper, StepOutcome};
pub use values::{generate_values, GenerationParams};
