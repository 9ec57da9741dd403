//! JSON list models.

mod blog;
mod press;

pub use blog::*;
pub use press::*;
