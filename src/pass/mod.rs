//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use generate::{ConfigError, generate};
pub use output::generate_batch;
