//! Input and output models

mod node;
mod value;

pub use node::*;
pub use value::*;
