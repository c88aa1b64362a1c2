//! Command implementations

pub mod bench;
pub mod check;
pub mod expand;
pub mod simple;

pub use bench::{BenchResult, BenchRow, run_bench};
pub use check::{CheckResult, check_word};
pub use expand::{ExpandResult, expand_words};
pub use simple::run_simple;
