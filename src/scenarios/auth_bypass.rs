// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::auth::acquire_guest_token;
use crate::probe::Probe;
use crate::report::Reporter;
use crate::transport::Transport;
use anyhow::Result;
use reqwest::Method;

pub const NAME: &str = "authorization-bypass";

const ME_PATH: &str = "/auth/me";

/// The four header configurations probed, in order. Three carry an
/// Authorization header (empty value, malformed value, lower-cased
/// scheme with a real token), one omits the header entirely.
fn attempts(token: &str) -> Vec<(&'static str, Option<String>)> {
    vec![
        ("Empty token", Some(String::new())),
        ("Invalid format", Some("invalid_token".to_string())),
        ("Bearer lowercase", Some(format!("bearer {}", token))),
        ("No header", None),
    ]
}

pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("Authorization Bypass Tests");
    let token = acquire_guest_token(transport).await?.unwrap_or_default();

    for (label, header) in attempts(&token) {
        let mut probe = Probe::new(Method::GET, ME_PATH, label);
        if let Some(value) = header {
            probe = probe.with_header("Authorization", value);
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
    fn test_four_distinct_header_configurations() {
        let attempts = attempts("abc");

        assert_eq!(attempts.len(), 4);
        assert_eq!(attempts.iter().filter(|(_, h)| h.is_some()).count(), 3);
        assert_eq!(attempts.iter().filter(|(_, h)| h.is_none()).count(), 1);
    }

    #[test]
    fn test_lowercase_scheme_keeps_real_token() {
        let attempts = attempts("tok123");
        let (_, header) = &attempts[2];

        assert_eq!(header.as_deref(), Some("bearer tok123"));
    }

    #[test]
    fn test_empty_and_malformed_values() {
        let attempts = attempts("abc");

        assert_eq!(attempts[0].1.as_deref(), Some(""));
        assert_eq!(attempts[1].1.as_deref(), Some("invalid_token"));
    }
}
