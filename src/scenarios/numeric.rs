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
use serde_json::{json, Value};

pub const NAME: &str = "numeric-boundary";

const QUICKPLAY_PATH: &str = "/matchmaking/quickplay";

const NEUTRAL_PLAYERS: i64 = 2;
const NEUTRAL_STAKE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetField {
    StakeVp,
    PlayersCount,
}

static CASES: &[(TargetField, i64, &str)] = &[
    (TargetField::StakeVp, -1, "Negative stake"),
    (TargetField::StakeVp, 0, "Zero stake"),
    (TargetField::StakeVp, 999_999_999_999_999_999, "Huge stake"),
    (TargetField::PlayersCount, 1, "1 player"),
    (TargetField::PlayersCount, 100, "100 players"),
    (TargetField::PlayersCount, -5, "Negative players"),
];

/// Exactly one field is adversarial per probe; the other keeps its
/// neutral default.
fn body_for(field: TargetField, value: i64) -> Value {
    match field {
        TargetField::StakeVp => json!({ "playersCount": NEUTRAL_PLAYERS, "stakeVp": value }),
        TargetField::PlayersCount => json!({ "playersCount": value, "stakeVp": NEUTRAL_STAKE }),
    }
}

/// Negative, zero and extreme-magnitude integers against the
/// matchmaking queue endpoint.
pub async fn run(transport: &Transport, reporter: &mut Reporter) -> Result<()> {
    reporter.banner("Numeric Boundary Tests");
    let token = acquire_guest_token(transport).await?;

    for (field, value, label) in CASES.iter().copied() {
        let mut probe =
            Probe::new(Method::POST, QUICKPLAY_PATH, label).with_json_body(body_for(field, value));
        if let Some(token) = &token {
            probe = probe.with_header("Authorization", format!("Bearer {}", token));
        }
        let observation = transport.send(&probe).await;
        reporter.case(probe.description(), &observation);
    }

    Ok(())
}
