//! CLI command implementations

mod simple;
mod stats;

pub use simple::run_simple;
pub use stats::print_stats;
