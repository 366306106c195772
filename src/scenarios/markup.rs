// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::auth::acquire_guest_token;
use crate::probe::Probe;
use crate::report::{truncate_chars, Reporter};
use crate::transport::Transport;
use anyhow::Result;
use reqwest::Method;
use serde_json::json;

pub const NAME: &str = "xss";

const PROFILE_PATH: &str = "/auth/profile";
const LABEL_CHARS: usize = 30;

static PAYLOADS: &[&str] = &[
    "<script>alert(1)</script>",
    "<img src=x onerror=alert(1)>",
    "<body onload=alert(1)>",
];

/// Markup and script payloads in the display-name field of the
/// profile-update endpoint.
pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("XSS Tests");
    let token = acquire_guest_token(transport).await?;

    for payload in PAYLOADS.iter().copied() {
        let label = format!("XSS '{}...'", truncate_chars(payload, LABEL_CHARS));
        let mut probe = Probe::new(Method::PATCH, PROFILE_PATH, label)
            .with_json_body(json!({ "displayName": payload }));
        if let Some(token) = &token {
            probe = probe.with_header("Authorization", format!("Bearer {}", token));
        }
        let observation = transport.send(&probe).await;
        reporter.case(probe.description(), &observation);
    }

    Ok(())
}
