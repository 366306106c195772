// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]

pub mod auth;
pub mod cli;
pub mod config;
pub mod observation;
pub mod probe;
pub mod report;
pub mod scenarios;
pub mod stats;
pub mod transport;
