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

pub const NAME: &str = "special-characters";

const PROFILE_PATH: &str = "/auth/profile";
const LABEL_CHARS: usize = 10;

static PAYLOADS: &[&str] = &[
    "🔥🎮👾",   // emoji
    "中文测试", // CJK
    "<>&\"'",   // HTML specials
    "Normal",   // baseline
];

/// Multi-byte and HTML-special characters in the display-name field.
pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("Special Characters Tests");
    let token = acquire_guest_token(transport).await?;

    for payload in PAYLOADS.iter().copied() {
        let label = format!("Special chars '{}'", truncate_chars(payload, LABEL_CHARS));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_multibyte_and_ascii() {
        assert_eq!(PAYLOADS.len(), 4);
        assert!(PAYLOADS.iter().any(|p| p.chars().count() < p.len()));
        assert!(PAYLOADS.contains(&"Normal"));
    }

    #[test]
    fn test_labels_never_split_code_points() {
        for payload in PAYLOADS {
            let label = truncate_chars(payload, LABEL_CHARS);
            assert!(payload.starts_with(&label));
        }
    }
}
