//! Structured JSON output for benchmark results.

use serde::Serialize;

/// Top-level benchmark result.
#[derive(Debug, Serialize)]
pub struct BenchResult {
    pub timestamp: String,
    /// Run label from the algorithm's `Display`, e.g.
    /// `pipe(kind=kd_tree, dtype=float32, trees=8)`.
    pub algorithm: String,
    pub scenario: String,
    pub config: BenchConfig,
    pub results: serde_json::Value,
}

/// Configuration snapshot for reproducibility.
#[derive(Debug, Serialize)]
pub struct BenchConfig {
    pub vectors: usize,
    pub dimensions: usize,
    pub queries: usize,
    pub top_k: usize,
    pub seed: u64,
}

impl BenchResult {
    pub fn new(
        algorithm: &str,
        scenario: &str,
        args: &super::Args,
        results: serde_json::Value,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            algorithm: algorithm.to_string(),
            scenario: scenario.to_string(),
            config: BenchConfig {
                vectors: args.vectors,
                dimensions: args.dimensions,
                queries: args.queries,
                top_k: args.top_k,
                seed: args.seed,
            },
            results,
        }
    }
}

/// Build a latency stats JSON object from an HDR histogram of
/// microsecond samples.
pub fn latency_stats(hist: &hdrhistogram::Histogram<u64>) -> serde_json::Value {
    serde_json::json!({
        "p50_ms": hist.value_at_quantile(0.50) as f64 / 1000.0,
        "p95_ms": hist.value_at_quantile(0.95) as f64 / 1000.0,
        "p99_ms": hist.value_at_quantile(0.99) as f64 / 1000.0,
        "max_ms": hist.max() as f64 / 1000.0,
        "mean_ms": hist.mean() / 1000.0,
        "count": hist.len(),
    })
}
