//! Benchmark suite for the cutlist layout engine
//!
//! This crate provides:
//! - Synthetic cut list generation with reproducible seeds
//! - A runner that times JSON layout requests
//! - Result recording (JSON, CSV) and summary tables

mod result;
mod runner;
mod synthetic;

pub use result::{BenchmarkReport, BenchmarkRun, SheetInfo};
pub use runner::{BenchmarkConfig, BenchmarkRunner};
pub use synthetic::{SyntheticGenerator, SyntheticParams};
