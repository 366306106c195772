// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::auth::acquire_guest_token;
use crate::probe::Probe;
use crate::report::Reporter;
use crate::transport::Transport;
use anyhow::Result;
use once_cell::sync::Lazy;
use reqwest::Method;
use serde_json::json;

pub const NAME: &str = "boundary-values";

const PROFILE_PATH: &str = "/auth/profile";

/// The backend caps display names at 20 characters.
const DISPLAY_NAME_LIMIT: usize = 20;

static CASES: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    vec![
        ("A".repeat(1000), "Very long name (1000 chars)"),
        ("A".repeat(DISPLAY_NAME_LIMIT), "Exactly 20 chars"),
        ("A".repeat(DISPLAY_NAME_LIMIT + 1), "21 chars (should fail)"),
    ]
});

/// Display-name lengths below, at and above the limit, submitted as
/// three distinct probes.
pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("Boundary Value Tests");
    let token = acquire_guest_token(transport).await?;

    for (value, label) in CASES.iter() {
        let mut probe = Probe::new(Method::PATCH, PROFILE_PATH, *label)
            .with_json_body(json!({ "displayName": value }));
        if let Some(token) = &token {
            probe = probe.with_header("Authorization", format!("Bearer {}", token));
        }
        let observation = transport.send(&probe).await;
        reporter.case(probe.description(), &observation);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_straddle_the_limit() {
        let lengths: Vec<usize> = CASES.iter().map(|(value, _)| value.len()).collect();
        assert_eq!(lengths, vec![1000, 20, 21]);
    }

    #[test]
    fn test_at_and_above_limit_are_distinct_probes() {
        assert!(CASES
            .iter()
            .any(|(value, _)| value.len() == DISPLAY_NAME_LIMIT));
        assert!(CASES
            .iter()
            .any(|(value, _)| value.len() == DISPLAY_NAME_LIMIT + 1));
    }
}
