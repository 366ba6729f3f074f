//! Selection state and check/uncheck transitions.

mod cascade;
mod checked;
mod engine;
mod mode;

pub use checked::CheckedSet;
pub use engine::SelectionEngine;
pub use mode::SelectionMode;
