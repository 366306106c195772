// File: auth.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::observation::Observation;
use crate::probe::Probe;
use crate::transport::Transport;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Method;
use serde_json::Value;

pub const GUEST_SESSION_PATH: &str = "/auth/guest";

/// Provision a short-lived guest credential.
///
/// Any non-201 outcome, including a transport failure, yields
/// `Ok(None)`: callers proceed without an Authorization header. A 201
/// whose body is not JSON or has no `token` field is a hard error and
/// aborts the calling scenario.
pub async fn acquire_guest_token(transport: &Transport) -> Result<Option<String>> {
    let probe = Probe::new(Method::POST, GUEST_SESSION_PATH, "guest session");
    match transport.send(&probe).await {
        Observation::Completed { status: 201, body } => {
            let value: Value = serde_json::from_str(&body)
                .context("guest session returned 201 with a non-JSON body")?;
            let token = value
                .get("token")
                .and_then(Value::as_str)
                .context("guest session response has no token field")?;
            Ok(Some(token.to_string()))
        }
        observation => {
            debug!(
                "guest session not provisioned (status {})",
                observation.status_code()
            );
            Ok(None)
        }
    }
}
