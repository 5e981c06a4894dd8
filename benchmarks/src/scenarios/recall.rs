//! Recall against exact ground truth.
//!
//! Sweeps the exploration budget when none was pinned on the command
//! line. Only tree kinds react to the sweep; for the rest every point
//! reports the same recall, which is itself worth seeing.

use std::time::Instant;

use mooring::adapter::Algorithm;

use crate::datasets;
use crate::Args;

pub fn run(args: &Args, algo: &mut dyn Algorithm<f32>) -> Result<serde_json::Value, anyhow::Error> {
    let batch = datasets::training_batch(args.vectors, args.dimensions, args.seed);
    eprintln!("  Fitting {} vectors...", args.vectors);
    algo.fit(&batch)?;

    let queries = datasets::query_vectors(args.queries, args.dimensions, args.seed + 1);
    eprintln!("  Computing ground truth for {} queries...", queries.len());
    let truth: Vec<Vec<u32>> = queries
        .iter()
        .map(|query| datasets::ground_truth(&batch, query, args.top_k))
        .collect();

    let budgets: Vec<Option<usize>> = match args.search_k {
        Some(explicit) => vec![Some(explicit)],
        None => vec![
            None,
            Some(args.top_k * 4),
            Some(args.top_k * 16),
            Some(args.top_k * 64),
        ],
    };

    let mut sweep = Vec::new();
    for budget in budgets {
        algo.set_query_arguments(budget);
        let start = Instant::now();
        let mut recall_sum = 0.0;
        for (query, expected) in queries.iter().zip(&truth) {
            let indices = algo.query(query, args.top_k)?;
            recall_sum += datasets::recall(&indices, expected);
        }
        let elapsed = start.elapsed().as_secs_f64();
        let mean_recall = recall_sum / queries.len() as f64;
        let qps = queries.len() as f64 / elapsed;

        eprintln!(
            "    search_k={} recall@{}={mean_recall:.4} qps={qps:.0}",
            budget.map_or("default".to_string(), |b| b.to_string()),
            args.top_k,
        );
        sweep.push(serde_json::json!({
            "search_k": budget,
            "recall": mean_recall,
            "qps": qps,
        }));
    }

    Ok(serde_json::json!({ "sweep": sweep }))
}
