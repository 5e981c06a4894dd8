//! Query latency distribution.
//!
//! One in-flight query per index by construction, so this measures
//! serial latency and derives throughput from it.

use std::time::Instant;

use hdrhistogram::Histogram;
use mooring::adapter::Algorithm;

use crate::datasets;
use crate::results;
use crate::Args;

pub fn run(args: &Args, algo: &mut dyn Algorithm<f32>) -> Result<serde_json::Value, anyhow::Error> {
    let batch = datasets::training_batch(args.vectors, args.dimensions, args.seed);
    eprintln!("  Fitting {} vectors...", args.vectors);
    let fit_start = Instant::now();
    algo.fit(&batch)?;
    let fit_secs = fit_start.elapsed().as_secs_f64();

    let queries = datasets::query_vectors(args.queries, args.dimensions, args.seed + 1);

    // Warm the session before measuring.
    for query in queries.iter().take(10) {
        let _ = algo.query(query, args.top_k)?;
    }

    let mut hist = Histogram::<u64>::new(3).unwrap();
    let start = Instant::now();
    for query in &queries {
        let t = Instant::now();
        let _ = algo.query(query, args.top_k)?;
        hist.record(t.elapsed().as_micros() as u64).ok();
    }
    let total = start.elapsed().as_secs_f64();
    let qps = queries.len() as f64 / total;

    eprintln!(
        "    p50={:.2}ms p95={:.2}ms p99={:.2}ms max={:.2}ms qps={qps:.0}",
        hist.value_at_quantile(0.50) as f64 / 1000.0,
        hist.value_at_quantile(0.95) as f64 / 1000.0,
        hist.value_at_quantile(0.99) as f64 / 1000.0,
        hist.max() as f64 / 1000.0,
    );

    let mut stats = results::latency_stats(&hist);
    stats["qps"] = serde_json::json!(qps);
    stats["fit_secs"] = serde_json::json!(fit_secs);
    Ok(stats)
}
