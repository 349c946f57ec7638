//! CLI command handlers.

mod generate;

pub use generate::{execute_generate, GenerateOptions};
