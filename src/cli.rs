// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(long, default_value = "localhost", help = "Target host")]
    pub host: String,

    #[arg(short = 'p', long, default_value_t = 3000, help = "Target port")]
    pub port: u16,

    #[arg(
        short = 't',
        long = "timeout-ms",
        default_value_t = 10_000,
        help = "Per-request deadline in milliseconds"
    )]
    pub timeout_ms: u64,

    #[arg(
        long = "log-level",
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 's',
        long = "scenario",
        help = "Run only the named scenario (see --list-scenarios)"
    )]
    pub scenario: Option<String>,

    #[arg(long = "list-scenarios", help = "List scenario names and exit")]
    pub list_scenarios: bool,

    #[arg(
        short = 'o',
        long = "report-file",
        help = "Write the collected observations to this file"
    )]
    pub report_file: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "report-format",
        default_value = "text",
        help = "Report format: text or json"
    )]
    pub report_format: String,
}
