// File: transport.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ProbeConfig;
use crate::observation::Observation;
use crate::probe::{Probe, ProbeBody};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// HTTP dispatch primitive. Every call builds a fresh client with an
/// empty connection pool, so each probe rides its own connection and
/// nothing is reused across probes. The contract is total: refused
/// connections, timeouts and protocol violations all come back as an
/// `Observation`, never as an error.
#[derive(Debug, Clone)]
pub struct Transport {
    config: ProbeConfig,
}

impl Transport {
    pub fn new(config: ProbeConfig) -> Self {
        Transport { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub async fn send(&self, probe: &Probe) -> Observation {
        let client = match reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(Duration::from_millis(self.config.timeout_ms()))
            .build()
        {
            Ok(client) => client,
            Err(e) => return Observation::failed(format!("client setup failed: {}", e)),
        };

        let url = format!("{}{}", self.config.origin(), probe.path());
        let mut request = client.request(probe.method().clone(), &url);

        match probe.body() {
            Some(ProbeBody::Json(value)) => {
                request = request.body(value.to_string());
                if !probe.has_header("content-type") {
                    request = request.header(CONTENT_TYPE, "application/json");
                }
            }
            Some(ProbeBody::Raw(text)) => {
                request = request.body(text.clone());
            }
            None => {}
        }

        for (name, value) in probe.headers() {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!("{} {}", probe.method(), url);

        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => Observation::completed(status, body),
                    Err(e) => Observation::failed(format!("failed to read body: {}", e)),
                }
            }
            Err(e) => Observation::failed(format!("request failed: {}", e)),
        }
    }
}
