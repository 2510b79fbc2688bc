//! Links Notation (Lino) Benchmark Report
//!
//! Records driver benchmark timings and writes them in Links Notation, a
//! small indentation-based format of named links:
//!
//! ```text
//! benchmark_report:
//!   timestamp '2026-01-01T00:00:00Z'
//! results:
//!   size_1024:
//!     quick:
//!       time_ms 0.051
//!       verified true
//! ```
//!
//! Reports can be parsed back and rendered as a Markdown table (see the
//! `lino2md` binary).

use std::fmt::Write;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::error::DriverError;

/// One algorithm timed at one array size
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Algorithm name as printed by `Algorithm::name`
    pub algorithm: String,
    pub array_size: usize,
    pub time_ms: f64,
    /// Whether the output passed the sortedness check
    pub verified: bool,
}

#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// RFC 3339 UTC timestamp of the run
    pub timestamp: String,
    pub description: String,
    pub system_info: SystemInfo,
    pub results: Vec<BenchmarkResult>,
}

#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    /// Worker threads available to the driver
    pub threads: usize,
}

impl Default for SystemInfo {
    fn default() -> Self {
        SystemInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            threads: rayon::current_num_threads(),
        }
    }
}

impl BenchmarkReport {
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: description.to_string(),
            system_info: SystemInfo::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: BenchmarkResult) {
        self.results.push(result);
    }

    /// Distinct array sizes, ascending
    fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.results.iter().map(|r| r.array_size).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Distinct algorithm names in first-seen order
    fn algorithms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for result in &self.results {
            if !names.contains(&result.algorithm.as_str()) {
                names.push(&result.algorithm);
            }
        }
        names
    }

    fn find(&self, algorithm: &str, size: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .find(|r| r.algorithm == algorithm && r.array_size == size)
    }

    /// Fastest verified result at `size`
    fn fastest(&self, size: usize) -> Option<&BenchmarkResult> {
        self.results
            .iter()
            .filter(|r| r.array_size == size && r.verified)
            .min_by(|a, b| a.time_ms.total_cmp(&b.time_ms))
    }

    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "benchmark_report:");
        let _ = writeln!(output, "  timestamp '{}'", self.timestamp);
        let _ = writeln!(output, "  description '{}'", escape_lino_string(&self.description));

        let _ = writeln!(output);
        let _ = writeln!(output, "system_info:");
        let _ = writeln!(output, "  os '{}'", escape_lino_string(&self.system_info.os));
        let _ = writeln!(output, "  arch '{}'", escape_lino_string(&self.system_info.arch));
        let _ = writeln!(output, "  threads {}", self.system_info.threads);

        let sizes = self.sizes();

        let _ = writeln!(output);
        let _ = writeln!(output, "results:");
        for &size in &sizes {
            let _ = writeln!(output, "  size_{}:", size);
            for result in self.results.iter().filter(|r| r.array_size == size) {
                let _ = writeln!(output, "    {}:", result.algorithm);
                let _ = writeln!(output, "      time_ms {:.3}", result.time_ms);
                let _ = writeln!(output, "      verified {}", result.verified);
            }
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "comparisons:");
        for &size in &sizes {
            let Some(fastest) = self.fastest(size) else {
                continue;
            };
            let _ = writeln!(output, "  size_{}:", size);
            let _ = writeln!(output, "    fastest {}", fastest.algorithm);
            for result in self.results.iter().filter(|r| r.array_size == size) {
                if !result.verified || result.algorithm == fastest.algorithm || fastest.time_ms <= 0.0 {
                    continue;
                }
                let _ = writeln!(output, "    {}_vs_{}:", result.algorithm, fastest.algorithm);
                let _ = writeln!(output, "      slowdown {:.2}", result.time_ms / fastest.time_ms);
            }
        }

        output
    }

    pub fn save_lino(&self, path: &Path) -> Result<(), DriverError> {
        fs::write(path, self.to_lino())?;
        Ok(())
    }

    /// One row per size, one column per algorithm, plus the fastest.
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();
        let algorithms = self.algorithms();

        let _ = writeln!(output, "# Integer Sorting Benchmark Report");
        let _ = writeln!(output);
        let _ = writeln!(output, "**Timestamp:** {}", self.timestamp);
        let _ = writeln!(output, "**Description:** {}", self.description);
        let _ = writeln!(output);

        let _ = writeln!(output, "## System Information");
        let _ = writeln!(output);
        let _ = writeln!(output, "| Property | Value |");
        let _ = writeln!(output, "|----------|-------|");
        let _ = writeln!(output, "| OS | {} |", self.system_info.os);
        let _ = writeln!(output, "| Arch | {} |", self.system_info.arch);
        let _ = writeln!(output, "| Threads | {} |", self.system_info.threads);
        let _ = writeln!(output);

        let _ = writeln!(output, "## Benchmark Results (ms)");
        let _ = writeln!(output);
        let mut header = String::from("| Size |");
        let mut rule = String::from("|------|");
        for name in &algorithms {
            let _ = write!(header, " {} |", name);
            rule.push_str(&"-".repeat(name.len() + 2));
            rule.push('|');
        }
        header.push_str(" Fastest |");
        rule.push_str("---------|");
        let _ = writeln!(output, "{}", header);
        let _ = writeln!(output, "{}", rule);

        for size in self.sizes() {
            let mut row = format!("| {} |", format_size(size));
            for name in &algorithms {
                let cell = match self.find(name, size) {
                    Some(r) if r.verified => format!("{:.3}", r.time_ms),
                    Some(_) => "FAILED".to_string(),
                    None => "N/A".to_string(),
                };
                let _ = write!(row, " {} |", cell);
            }
            let fastest = self
                .fastest(size)
                .map(|r| r.algorithm.as_str())
                .unwrap_or("N/A");
            let _ = write!(row, " {} |", fastest);
            let _ = writeln!(output, "{}", row);
        }

        let _ = writeln!(output);
        let _ = writeln!(output, "---");
        let _ = writeln!(output, "*Report generated by intsort*");

        output
    }

    pub fn save_markdown(&self, path: &Path) -> Result<(), DriverError> {
        fs::write(path, self.to_markdown_table())?;
        Ok(())
    }
}

fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000_000 {
        format!("{}G", size / 1_000_000_000)
    } else if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

fn extract_quoted_value(line: &str, prefix: &str) -> Option<String> {
    let rest = line.strip_prefix(prefix)?.trim();
    let inner = rest.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("\\'", "'"))
}

/// Parse a report written by [`BenchmarkReport::to_lino`].
///
/// Only the header, system info and `results:` section are read; the
/// `comparisons:` section is derived data and is recomputed on output.
pub fn parse_lino_report(content: &str) -> Result<BenchmarkReport, DriverError> {
    enum Section {
        Header,
        System,
        Results,
        Comparisons,
    }

    let mut report = BenchmarkReport::new("Parsed report");
    let mut section = Section::Header;
    let mut current_size: Option<usize> = None;
    let mut current: Option<BenchmarkResult> = None;

    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            "benchmark_report:" => {
                section = Section::Header;
                continue;
            }
            "system_info:" => {
                section = Section::System;
                continue;
            }
            "results:" => {
                section = Section::Results;
                continue;
            }
            "comparisons:" => {
                report.results.extend(current.take());
                section = Section::Comparisons;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Header => {
                if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                    report.timestamp = ts;
                } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                    report.description = desc;
                }
            }
            Section::System => {
                if let Some(os) = extract_quoted_value(trimmed, "os") {
                    report.system_info.os = os;
                } else if let Some(arch) = extract_quoted_value(trimmed, "arch") {
                    report.system_info.arch = arch;
                } else if let Some(threads) = trimmed.strip_prefix("threads ") {
                    report.system_info.threads = threads.trim().parse().map_err(|_| {
                        DriverError::ReportParse(format!("line {}: bad thread count", line_no + 1))
                    })?;
                }
            }
            Section::Results => {
                if let Some(size) = trimmed
                    .strip_prefix("size_")
                    .and_then(|s| s.strip_suffix(':'))
                {
                    report.results.extend(current.take());
                    current_size = Some(size.parse().map_err(|_| {
                        DriverError::ReportParse(format!("line {}: bad size '{}'", line_no + 1, size))
                    })?);
                } else if let Some(name) = trimmed.strip_suffix(':').filter(|n| !n.contains(' ')) {
                    let array_size = current_size.ok_or_else(|| {
                        DriverError::ReportParse(format!(
                            "line {}: result '{}' outside a size block",
                            line_no + 1,
                            name
                        ))
                    })?;
                    report.results.extend(current.take());
                    current = Some(BenchmarkResult {
                        algorithm: name.to_string(),
                        array_size,
                        time_ms: 0.0,
                        verified: false,
                    });
                } else if let Some(result) = current.as_mut() {
                    if let Some(time) = trimmed.strip_prefix("time_ms ") {
                        result.time_ms = time.trim().parse().map_err(|_| {
                            DriverError::ReportParse(format!("line {}: bad time '{}'", line_no + 1, time))
                        })?;
                    } else if let Some(verified) = trimmed.strip_prefix("verified ") {
                        result.verified = verified.trim() == "true";
                    }
                }
            }
            Section::Comparisons => {}
        }
    }

    report.results.extend(current);

    if report.results.is_empty() {
        return Err(DriverError::ReportParse("no benchmark results found".to_string()));
    }
    Ok(report)
}
