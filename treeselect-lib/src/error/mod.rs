//! Error types

mod config;
mod tree;
mod validation;

pub use config::*;
pub use tree::*;
pub use validation::*;
