// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::probe::Probe;
use crate::report::{truncate_chars, Reporter};
use crate::transport::Transport;
use anyhow::Result;
use reqwest::Method;
use serde_json::json;

pub const NAME: &str = "sql-injection";

const REGISTER_PATH: &str = "/auth/register";
const LABEL_CHARS: usize = 35;

static PAYLOADS: &[&str] = &[
    "test@test.com' OR '1'='1",
    "test@test.com'; DROP TABLE users; --",
    r#"test@test.com" OR "1"="1"#,
    "test@test.com' UNION SELECT * FROM users --",
];

/// Injection strings in the identity field of the registration
/// endpoint. The password stays fixed so the email is the only hostile
/// input.
pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("SQL Injection Tests");

    for payload in PAYLOADS.iter().copied() {
        let label = format!("SQLi '{}...'", truncate_chars(payload, LABEL_CHARS));
        let probe = Probe::new(Method::POST, REGISTER_PATH, label).with_json_body(json!({
            "email": payload,
            "password": "password123",
        }));
        let observation = transport.send(&probe).await;
        reporter.case(probe.description(), &observation);
    }

    Ok(())
}
