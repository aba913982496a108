//! Paid-media benchmark data — industry default curves and the loader for
//! measured benchmarks extracted from competitor analysis.

pub mod curves;
pub mod provider;

pub use curves::BenchmarkCurveSet;
pub use provider::{load, BenchmarkSource, LoadedBenchmarks};
