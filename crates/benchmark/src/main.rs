//! Cut list benchmark CLI

use clap::{Parser, Subcommand};
use cutlist_benchmark::{
    BenchmarkConfig, BenchmarkReport, BenchmarkRunner, SyntheticGenerator, SyntheticParams,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cutlist-bench")]
#[command(about = "Benchmark runner for the cutlist sheet layout engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a JSON layout request file
    RunFile {
        /// Path to the JSON request
        file: PathBuf,

        /// Number of runs (fastest is reported)
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate and solve random cut lists
    Synthetic {
        /// Piece definitions per cut list
        #[arg(short, long, default_value = "40")]
        count: usize,

        /// Random seed for reproducibility
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Number of wood types
        #[arg(short, long, default_value = "2")]
        wood_types: usize,

        /// Probability that a piece starts a block
        #[arg(short, long, default_value = "0.1")]
        block_rate: f64,

        /// Number of cut lists (seeds seed, seed+1, ...)
        #[arg(short, long, default_value = "1")]
        instances: usize,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Write a synthetic request to disk without solving it
    Generate {
        /// Output file (JSON request)
        output: PathBuf,

        #[arg(short, long, default_value = "40")]
        count: usize,

        #[arg(short, long, default_value = "42")]
        seed: u64,

        #[arg(short, long, default_value = "2")]
        wood_types: usize,

        #[arg(short, long, default_value = "0.1")]
        block_rate: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::RunFile { file, runs, output } => {
            let runner = BenchmarkRunner::new(BenchmarkConfig::new().with_runs_per_request(runs));
            let run = runner.run_file(&file)?;

            if let Some(error) = &run.error {
                anyhow::bail!("{}: {}", file.display(), error);
            }

            run.print_sheets();
            let mut report = BenchmarkReport::new();
            report.add_run(run);
            report.print_summary();

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }
        }

        Commands::Synthetic {
            count,
            seed,
            wood_types,
            block_rate,
            instances,
            output,
            csv,
        } => {
            let params = SyntheticParams {
                count,
                wood_types,
                block_rate,
                ..Default::default()
            };
            let runner = BenchmarkRunner::new(BenchmarkConfig::new());
            let report = runner.run_synthetic(&params, seed, instances.max(1));
            report.print_summary();

            if let Some(avg) = report.average_efficiency() {
                println!("Average efficiency: {:.1}%", avg * 100.0);
            }

            if let Some(path) = output {
                report.save_json(&path)?;
                println!("Results saved to: {}", path.display());
            }
            if let Some(path) = csv {
                report.save_csv(&path)?;
                println!("CSV saved to: {}", path.display());
            }
        }

        Commands::Generate {
            output,
            count,
            seed,
            wood_types,
            block_rate,
        } => {
            let params = SyntheticParams {
                count,
                wood_types,
                block_rate,
                ..Default::default()
            };
            let request = SyntheticGenerator::with_seed(seed).generate(&params);
            std::fs::write(&output, serde_json::to_string_pretty(&request)?)?;
            println!(
                "Wrote {} piece definitions to {}",
                request.pieces.len(),
                output.display()
            );
        }
    }

    Ok(())
}
