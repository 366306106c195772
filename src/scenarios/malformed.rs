// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::probe::Probe;
use crate::report::{truncate_chars, Reporter};
use crate::transport::Transport;
use anyhow::Result;
use reqwest::Method;

pub const NAME: &str = "invalid-json";

const REGISTER_PATH: &str = "/auth/register";
const LABEL_CHARS: usize = 30;

static PAYLOADS: &[&str] = &[
    r#"{"email": "test@test.com", "password": }"#,
    r#"{"email": "test@test.com", }"#,
    "{invalid json}",
    "",
];

/// Syntactically broken request bodies against the registration
/// endpoint. The bodies are sent raw so they reach the wire exactly as
/// written, while the content type still claims JSON.
pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("Invalid JSON Tests");

    for payload in PAYLOADS.iter().copied() {
        let label = format!("Invalid JSON '{}...'", truncate_chars(payload, LABEL_CHARS));
        let probe = Probe::new(Method::POST, REGISTER_PATH, label)
            .with_raw_body(payload)
            .with_header("Content-Type", "application/json");
        let observation = transport.send(&probe).await;
        reporter.case(probe.description(), &observation);
    }

    Ok(())
}
