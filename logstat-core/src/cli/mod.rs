mod analyze;
mod input;
mod invoke;

#[cfg(test)]
mod tests;

pub use analyze::{AnalyzeArgs, run_analyze, write_report};
pub use input::{parse_batch, read_batch};
pub use invoke::{InvokeArgs, run_invoke};
