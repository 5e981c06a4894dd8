//! Benchmark scenarios, each pinning one question about a boundary.

pub mod latency;
pub mod recall;
pub mod smoke;
