pub mod error;
pub mod report;

#[cfg(test)]
mod testing;

pub use report::{build_report, compare_with_official, official_history};
