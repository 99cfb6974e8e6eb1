pub mod cli;
pub mod formatters;
pub mod progress;
