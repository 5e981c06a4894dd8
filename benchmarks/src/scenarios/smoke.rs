//! End-to-end smoke run.
//!
//! Small fit plus a handful of queries; checks shapes, not speed. Run
//! this first against a fresh engine build.

use std::time::Instant;

use mooring::adapter::Algorithm;

use crate::datasets;
use crate::Args;

pub fn run(args: &Args, algo: &mut dyn Algorithm<f32>) -> Result<serde_json::Value, anyhow::Error> {
    let rows = args.vectors.min(1_000);
    let batch = datasets::training_batch(rows, args.dimensions, args.seed);

    let fit_start = Instant::now();
    algo.fit(&batch)?;
    let fit_secs = fit_start.elapsed().as_secs_f64();
    eprintln!("  Fitted {rows} vectors in {fit_secs:.2}s");

    let queries = datasets::query_vectors(10, args.dimensions, args.seed + 1);
    let mut results_per_query = Vec::new();
    let query_start = Instant::now();
    for query in &queries {
        let indices = algo.query(query, args.top_k)?;
        anyhow::ensure!(
            indices.len() <= args.top_k,
            "engine returned {} results for k = {}",
            indices.len(),
            args.top_k
        );
        anyhow::ensure!(
            indices.iter().all(|&idx| (idx as usize) < rows),
            "engine returned an out-of-range row index"
        );
        results_per_query.push(indices.len());
    }
    let query_secs = query_start.elapsed().as_secs_f64();
    eprintln!("  {} queries in {query_secs:.2}s", queries.len());

    Ok(serde_json::json!({
        "fit_secs": fit_secs,
        "query_secs": query_secs,
        "queries": queries.len(),
        "results_per_query": results_per_query,
    }))
}
