//! Picker configuration errors

/// Errors raised by the picker before it can be opened.
///
/// These are user-facing: the display text doubles as the message shown in
/// place of the selected value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The forest is empty, so there is nothing to pick from.
    #[error("Data source is not configured correctly, the picker cannot be used")]
    EmptyForest,
}
