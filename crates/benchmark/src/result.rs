//! Benchmark result types and recording.

use cutlist_ffi::SolveResponse;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Per-sheet line of a run, kept for printing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetInfo {
    pub index: usize,
    pub wood_type: Option<String>,
    pub pieces: usize,
    pub efficiency: f64,
}

/// Result of a single benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRun {
    /// Request name (file stem or synthetic label).
    pub name: String,
    /// Unit pieces requested.
    pub total_pieces: usize,
    /// Unit pieces placed.
    pub pieces_placed: usize,
    /// Number of sheets used.
    pub sheets_used: usize,
    /// Overall efficiency (0.0 - 1.0).
    pub efficiency: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Error message if the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Warnings raised during the run.
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub sheets: Vec<SheetInfo>,
}

impl BenchmarkRun {
    /// Builds a run record from a solve response.
    pub fn from_response(name: impl Into<String>, response: &SolveResponse, time_ms: u64) -> Self {
        let pieces_placed: usize = response.sheets.iter().map(|s| s.placements.len()).sum();
        Self {
            name: name.into(),
            total_pieces: pieces_placed + response.unplaced.len(),
            pieces_placed,
            sheets_used: response.sheet_count,
            efficiency: response.efficiency,
            time_ms,
            error: response.error.clone(),
            issues: response.issues.clone(),
            sheets: response
                .sheets
                .iter()
                .map(|s| SheetInfo {
                    index: s.index,
                    wood_type: s.wood_type.clone(),
                    pieces: s.placements.len(),
                    efficiency: s.efficiency,
                })
                .collect(),
        }
    }

    /// Returns true when the request was solved.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Prints one line per sheet.
    pub fn print_sheets(&self) {
        println!("{:-<60}", "");
        println!("{:>6} {:<16} {:>10} {:>10}", "Sheet", "Wood", "Pieces", "Util%");
        println!("{:-<60}", "");
        for sheet in &self.sheets {
            println!(
                "{:>6} {:<16} {:>10} {:>10.1}",
                sheet.index,
                sheet.wood_type.as_deref().unwrap_or("-"),
                sheet.pieces,
                sheet.efficiency * 100.0
            );
        }
        for issue in &self.issues {
            println!("warning: {}", issue);
        }
    }
}

/// Collection of benchmark results.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Individual run results.
    pub runs: Vec<BenchmarkRun>,
    /// Library version that produced the report.
    pub version: String,
}

impl BenchmarkReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Adds a run result.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Saves results to a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = File::create(path)?;

        writeln!(
            file,
            "name,total_pieces,pieces_placed,sheets_used,efficiency,time_ms,error"
        )?;

        for run in &self.runs {
            writeln!(
                file,
                "{},{},{},{},{:.4},{},{}",
                run.name,
                run.total_pieces,
                run.pieces_placed,
                run.sheets_used,
                run.efficiency,
                run.time_ms,
                run.error.as_deref().unwrap_or(""),
            )?;
        }

        Ok(())
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<80}", "");
        println!("BENCHMARK RESULTS");
        println!("{:=<80}", "");
        println!(
            "{:<24} {:>10} {:>10} {:>8} {:>10} {:>10}",
            "Name", "Placed", "Total", "Sheets", "Util%", "Time(ms)"
        );
        println!("{:-<80}", "");

        for run in &self.runs {
            match &run.error {
                Some(error) => println!("{:<24} failed: {}", run.name, error),
                None => println!(
                    "{:<24} {:>10} {:>10} {:>8} {:>10.1} {:>10}",
                    run.name,
                    run.pieces_placed,
                    run.total_pieces,
                    run.sheets_used,
                    run.efficiency * 100.0,
                    run.time_ms
                ),
            }
        }

        println!("{:=<80}\n", "");
    }

    /// Mean efficiency over successful runs.
    pub fn average_efficiency(&self) -> Option<f64> {
        let solved: Vec<f64> = self
            .runs
            .iter()
            .filter(|r| r.is_success())
            .map(|r| r.efficiency)
            .collect();
        if solved.is_empty() {
            None
        } else {
            Some(solved.iter().sum::<f64>() / solved.len() as f64)
        }
    }
}
