//! Deterministic synthetic datasets.

use mooring::batch::VectorBatch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn training_batch(rows: usize, dim: usize, seed: u64) -> VectorBatch<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<f32> = (0..rows * dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
    VectorBatch::from_flat(dim, data).expect("generated batch is well formed")
}

pub fn query_vectors(count: usize, dim: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

/// Exact nearest rows by euclidean distance, best first.
pub fn ground_truth(batch: &VectorBatch<f32>, query: &[f32], k: usize) -> Vec<u32> {
    let mut scored: Vec<(f32, u32)> = (0..batch.rows())
        .map(|row| {
            let dist = batch
                .row(row)
                .iter()
                .zip(query)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f32>();
            (dist, row as u32)
        })
        .collect();
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(k).map(|(_, row)| row).collect()
}

/// Fraction of `truth` present in `results`.
pub fn recall(results: &[u32], truth: &[u32]) -> f64 {
    if truth.is_empty() {
        return 1.0;
    }
    let hits = results.iter().filter(|idx| truth.contains(idx)).count();
    hits as f64 / truth.len() as f64
}
