// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use advprobe::cli::Cli;
use advprobe::config::ProbeConfig;
use advprobe::report::{ReportFormat, ReportGenerator, Reporter};
use advprobe::scenarios;
use advprobe::transport::Transport;
use clap::Parser;
use colored::*;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}

fn format_duration(ms: u64) -> String {
    if ms >= 60000 {
        format!(
            "{:.1}m {:.1}s",
            ms as f64 / 60000.0,
            (ms % 60000) as f64 / 1000.0
        )
    } else if ms >= 1000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}ms", ms)
    }
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let level = LevelFilter::from_str(&cli.log_level).unwrap_or(LevelFilter::Warn);
    if SimpleLogger::new().with_level(level).init().is_err() {
        eprintln!("logger initialization failed");
    }

    if cli.list_scenarios {
        for name in scenarios::SCENARIO_NAMES {
            println!("{}", name);
        }
        return ExitCode::SUCCESS;
    }

    let report_format = match ReportFormat::parse(&cli.report_format) {
        Some(format) => format,
        None => {
            print_error(&format!("unknown report format: {}", cli.report_format));
            return ExitCode::FAILURE;
        }
    };

    let mut config = ProbeConfig::new();
    config.set_host(cli.host.clone());
    config.set_port(cli.port);
    config.set_timeout_ms(cli.timeout_ms);

    println!("Probing {}", config.origin().bold());

    let transport = Transport::new(config);
    let mut reporter = Reporter::new();
    reporter.stats_mut().set_start_time(now_ms());

    match &cli.scenario {
        Some(name) => {
            if !scenarios::run_named(name, &transport, &mut reporter).await {
                print_error(&format!("unknown scenario: {}", name));
                eprintln!("available: {}", scenarios::SCENARIO_NAMES.join(", "));
                return ExitCode::FAILURE;
            }
        }
        None => scenarios::run_all(&transport, &mut reporter).await,
    }

    reporter.stats_mut().set_end_time(now_ms());

    let stats = *reporter.stats();
    println!(
        "\n{} probes in {}. {} completed, {} transport failures.",
        stats.total_probes(),
        format_duration(stats.elapsed_ms()),
        stats.completed_probes(),
        stats.transport_failures()
    );

    if let Some(path) = &cli.report_file {
        match ReportGenerator::generate_report(reporter.entries(), path, report_format) {
            Ok(()) => println!("Report written to {}", path.display()),
            Err(e) => {
                print_error(&format!("failed to write report: {:#}", e));
                return ExitCode::FAILURE;
            }
        }
    }

    if stats.has_transport_failures() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
