//! Benchmark runner for layout requests.

use crate::result::{BenchmarkReport, BenchmarkRun};
use crate::synthetic::{SyntheticGenerator, SyntheticParams};
use anyhow::Context;
use cutlist_ffi::{solve_request, SolveRequest};
use std::path::Path;
use std::time::Instant;

/// Configuration for benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of runs per request; the fastest is kept.
    pub runs_per_request: usize,
    /// Whether to log progress.
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            runs_per_request: 1,
            show_progress: true,
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of runs per request.
    pub fn with_runs_per_request(mut self, n: usize) -> Self {
        self.runs_per_request = n.max(1);
        self
    }
}

/// Benchmark runner.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Solves a request and records the best timing.
    pub fn run_request(&self, name: &str, request: &SolveRequest) -> BenchmarkRun {
        if self.config.show_progress {
            log::info!("running {} ({} piece definitions)", name, request.pieces.len());
        }

        let mut best = self.time_once(name, request);
        for _ in 1..self.config.runs_per_request {
            let run = self.time_once(name, request);
            if run.time_ms < best.time_ms {
                best = run;
            }
        }
        best
    }

    fn time_once(&self, name: &str, request: &SolveRequest) -> BenchmarkRun {
        let start = Instant::now();
        let response = solve_request(request);
        let elapsed = start.elapsed().as_millis() as u64;
        BenchmarkRun::from_response(name, &response, elapsed)
    }

    /// Loads a JSON request from disk and runs it.
    pub fn run_file(&self, path: &Path) -> anyhow::Result<BenchmarkRun> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let request: SolveRequest = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("request");
        Ok(self.run_request(name, &request))
    }

    /// Generates and runs `count` synthetic requests, one per seed from `seed`.
    pub fn run_synthetic(
        &self,
        params: &SyntheticParams,
        seed: u64,
        count: usize,
    ) -> BenchmarkReport {
        let mut report = BenchmarkReport::new();
        for offset in 0..count as u64 {
            let request = SyntheticGenerator::with_seed(seed + offset).generate(params);
            let name = format!("synthetic-{}-s{}", params.count, seed + offset);
            report.add_run(self.run_request(&name, &request));
        }
        report
    }
}
