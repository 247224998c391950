//! Terminal output formatting
//!
//! Display utilities shared by the CLI modes.

pub mod formatters;

pub use formatters::{colored_guess_row, create_progress_bar, distribution_bar};
