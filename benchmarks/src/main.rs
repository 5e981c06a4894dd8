//! Benchmark driver for the mooring engine client.
//!
//! Drives one engine boundary (pipe or ffi) through the [`Algorithm`]
//! surface and emits a JSON result document per run:
//!
//! ```bash
//! mooring-bench --boundary pipe --index kd_tree --trees 8 --scenario recall
//! mooring-bench --boundary ffi --index flat --scenario latency --output out.json
//! ```

mod datasets;
mod results;
mod scenarios;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mooring::adapter::{Algorithm, FfiAlgorithm, PipeAlgorithm};
use mooring::config::Config;
use mooring::params::IndexParams;
use mooring::pipe::Transport;
use mooring::registry::IndexKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Boundary {
    /// Engine subprocess, frames over stdio or a unix socket.
    Pipe,
    /// Engine shared library loaded in-process.
    Ffi,
}

#[derive(Debug, Parser)]
#[command(name = "mooring-bench")]
#[command(about = "Benchmarks for the mooring engine client")]
pub struct Args {
    /// Engine boundary to drive.
    #[arg(long, value_enum, default_value = "pipe")]
    boundary: Boundary,

    /// Index kind tag (flat, kd_tree, rp_tree, aknn, rp_aknn).
    #[arg(long, default_value = "flat")]
    pub index: String,

    /// Scenario to run (smoke, recall, latency).
    #[arg(long, default_value = "smoke")]
    pub scenario: String,

    /// Training vectors.
    #[arg(long, default_value_t = 10_000)]
    pub vectors: usize,

    /// Vector dimensionality.
    #[arg(long, default_value_t = 128)]
    pub dimensions: usize,

    /// Queries per scenario.
    #[arg(long, default_value_t = 1_000)]
    pub queries: usize,

    /// Neighbors per query.
    #[arg(long, default_value_t = 10)]
    pub top_k: usize,

    /// Dataset RNG seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Tree count for tree kinds.
    #[arg(long)]
    pub trees: Option<u32>,

    /// Leaf size for tree kinds.
    #[arg(long)]
    pub leafs: Option<u32>,

    /// Exploration budget for tree kinds. The recall scenario sweeps a
    /// range when this is unset.
    #[arg(long)]
    pub search_k: Option<usize>,

    /// Graph degree for graph kinds.
    #[arg(long)]
    pub neighbors: Option<u32>,

    /// Pruning rate for graph kinds.
    #[arg(long)]
    pub rho: Option<f32>,

    /// Ask the engine to write CPU profiles.
    #[arg(long)]
    pub profile: bool,

    /// Carry predict frames over this unix socket (pipe boundary only).
    #[arg(long)]
    pub sock: Option<PathBuf>,

    /// Engine config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the JSON result here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl Args {
    fn params(&self) -> IndexParams {
        IndexParams {
            trees: self.trees,
            leafs: self.leafs,
            neighbors: self.neighbors,
            rho: self.rho,
            use_profile: self.profile,
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load .env
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = Config::load(args.config.as_deref()).context("loading engine config")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }

    let kind = IndexKind::from_tag(&args.index)?;
    let params = args.params();

    let mut algo: Box<dyn Algorithm<f32>> = match args.boundary {
        Boundary::Pipe => {
            let mut pipe = PipeAlgorithm::new(config.engine.clone(), kind, params);
            if let Some(sock) = &args.sock {
                pipe = pipe.with_transport(Transport::UnixSocket(sock.clone()));
            }
            Box::new(pipe)
        }
        Boundary::Ffi => {
            let library = config.engine.library.clone().context(
                "ffi boundary needs engine.library in the config or MOORING_ENGINE_LIB",
            )?;
            Box::new(FfiAlgorithm::open(&library, kind, params)?)
        }
    };
    if let Some(search_k) = args.search_k {
        algo.set_query_arguments(Some(search_k));
    }

    let label = algo.to_string();
    eprintln!("Running {} against {label}", args.scenario);
    let outcome = match args.scenario.as_str() {
        "smoke" => scenarios::smoke::run(&args, algo.as_mut())?,
        "recall" => scenarios::recall::run(&args, algo.as_mut())?,
        "latency" => scenarios::latency::run(&args, algo.as_mut())?,
        other => bail!("unknown scenario {other}; expected smoke, recall or latency"),
    };

    let report = results::BenchResult::new(&label, &args.scenario, &args, outcome);
    let rendered = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Result written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
