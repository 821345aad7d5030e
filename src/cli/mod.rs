//! Command-line interface definitions.

mod args;
mod enums;

pub use args::Args;
