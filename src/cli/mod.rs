// CLI support for the ferrotag binary
pub mod commands;
pub mod output;

pub use output::{OutputFormat, OutputFormatter};
