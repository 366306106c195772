// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::report::Reporter;
use crate::transport::Transport;
use log::warn;

pub mod auth_bypass;
pub mod boundary;
pub mod charset;
pub mod injection;
pub mod malformed;
pub mod markup;
pub mod numeric;

/// Catalog order. `run_all` executes the scenarios exactly in this
/// order, one probe in flight at a time.
pub const SCENARIO_NAMES: &[&str] = &[
    injection::NAME,
    markup::NAME,
    boundary::NAME,
    malformed::NAME,
    charset::NAME,
    auth_bypass::NAME,
    numeric::NAME,
];

pub async fn run_all(transport: &Transport, reporter: &mut Reporter) {
    for name in SCENARIO_NAMES {
        run_named(name, transport, reporter).await;
    }
}

/// Runs one scenario by catalog name; returns false for an unknown
/// name. A scenario that aborts (guest provisioning hard failure) is
/// logged and does not stop the caller.
pub async fn run_named(name: &str, transport: &Transport, reporter: &mut Reporter) -> bool {
    let outcome = match name {
        injection::NAME => injection::run(transport, reporter).await,
        markup::NAME => markup::run(transport, reporter).await,
        boundary::NAME => boundary::run(transport, reporter).await,
        malformed::NAME => malformed::run(transport, reporter).await,
        charset::NAME => charset::run(transport, reporter).await,
        auth_bypass::NAME => auth_bypass::run(transport, reporter).await,
        numeric::NAME => numeric::run(transport, reporter).await,
        _ => return false,
    };
    if let Err(e) = outcome {
        warn!("scenario {} aborted: {:#}", name, e);
    }
    true
}
