// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::observation::Observation;
use crate::stats::RunStats;
use anyhow::Result;
use chrono::Utc;
use colored::*;
use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const BODY_EXCERPT_CHARS: usize = 120;

/// One reported probe outcome, in dispatch order.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub scenario: String,
    pub case_label: String,
    pub observed_status: i32,
    pub body_excerpt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Prints one line per probe, keeps the ordered record list behind the
/// lines, and counts outcomes for the final summary and exit status.
pub struct Reporter {
    scenario: String,
    entries: Vec<ReportEntry>,
    stats: RunStats,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter {
            scenario: String::new(),
            entries: Vec::new(),
            stats: RunStats::new(),
        }
    }

    /// Opens a scenario section; subsequent cases are attributed to it.
    pub fn banner(&mut self, scenario: &str) {
        self.scenario = scenario.to_string();
        println!("\n{}", format!("=== {} ===", scenario).cyan().bold());
    }

    pub fn case(&mut self, label: &str, observation: &Observation) {
        if observation.is_transport_failure() {
            self.stats.add_transport_failure();
            debug!("{}: {}", label, observation.text());
        } else {
            self.stats.add_completed();
        }

        let status = observation.status_code();
        println!("{}: HTTP {}", label, colorize_status(status));

        self.entries.push(ReportEntry {
            scenario: self.scenario.clone(),
            case_label: label.to_string(),
            observed_status: status,
            body_excerpt: truncate_chars(observation.text(), BODY_EXCERPT_CHARS),
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut RunStats {
        &mut self.stats
    }
}

fn colorize_status(status: i32) -> ColoredString {
    match status {
        -1 => status.to_string().red().bold(),
        200..=299 => status.to_string().green(),
        400..=499 => status.to_string().yellow(),
        500..=599 => status.to_string().red(),
        _ => status.to_string().normal(),
    }
}

/// Character-based truncation. Payload prefixes must survive multi-byte
/// input untouched, so this never cuts inside a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate_report(
        entries: &[ReportEntry],
        output_path: &Path,
        format: ReportFormat,
    ) -> Result<()> {
        match format {
            ReportFormat::Text => Self::generate_text_report(entries, output_path),
            ReportFormat::Json => Self::generate_json_report(entries, output_path),
        }
    }

    pub fn generate_text_report(entries: &[ReportEntry], output_path: &Path) -> Result<()> {
        let mut file = File::create(output_path)?;
        writeln!(
            file,
            "# advprobe report, generated {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        for entry in entries {
            writeln!(
                file,
                "[{}] {}: HTTP {} | {}",
                entry.scenario, entry.case_label, entry.observed_status, entry.body_excerpt
            )?;
        }
        Ok(())
    }

    pub fn generate_json_report(entries: &[ReportEntry], output_path: &Path) -> Result<()> {
        let report = serde_json::json!({
            "generated_at": Utc::now().to_rfc3339(),
            "entries": entries,
        });
        let mut file = File::create(output_path)?;
        writeln!(file, "{}", serde_json::to_string_pretty(&report)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("test@test.com' OR '1'='1", 35, "test@test.com' OR '1'='1")]
    #[case("test@test.com' UNION SELECT * FROM users --", 35, "test@test.com' UNION SELECT * FROM ")]
    #[case("<img src=x onerror=alert(1)>", 30, "<img src=x onerror=alert(1)>")]
    #[case("🔥🎮👾", 10, "🔥🎮👾")]
    #[case("中文测试中文测试中文测试", 10, "中文测试中文测试中文")]
    #[case("", 30, "")]
    fn test_truncate_chars(#[case] input: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(truncate_chars(input, max), expected);
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!(ReportFormat::parse("text"), Some(ReportFormat::Text));
        assert_eq!(ReportFormat::parse("JSON"), Some(ReportFormat::Json));
        assert_eq!(ReportFormat::parse("xml"), None);
    }

    #[test]
    fn test_case_records_entry_and_counts_sentinel() {
        let mut reporter = Reporter::new();
        reporter.banner("Transport Check");
        reporter.case("refused", &Observation::failed("connection refused"));
        reporter.case("served", &Observation::completed(200, "ok"));

        let entries = reporter.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].scenario, "Transport Check");
        assert_eq!(entries[0].observed_status, -1);
        assert_eq!(entries[0].body_excerpt, "connection refused");
        assert_eq!(entries[1].observed_status, 200);

        assert_eq!(reporter.stats().transport_failures(), 1);
        assert_eq!(reporter.stats().completed_probes(), 1);
    }

    #[test]
    fn test_body_excerpt_is_bounded() {
        let mut reporter = Reporter::new();
        reporter.banner("Bounds");
        reporter.case("long", &Observation::completed(200, "x".repeat(4096)));

        assert_eq!(reporter.entries()[0].body_excerpt.chars().count(), 120);
    }

    #[test]
    fn test_report_entry_serializes() {
        let entry = ReportEntry {
            scenario: "SQL Injection Tests".to_string(),
            case_label: "SQLi 'x...'".to_string(),
            observed_status: 400,
            body_excerpt: "bad request".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["scenario"], "SQL Injection Tests");
        assert_eq!(json["observed_status"], 400);
    }
}
