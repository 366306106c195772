// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use advprobe::config::ProbeConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration pointed at a mock backend instance.
pub fn config_for(server: &MockServer) -> ProbeConfig {
    let address = server.address();
    let mut config = ProbeConfig::new();
    config.set_host(address.ip().to_string());
    config.set_port(address.port());
    config.set_timeout_ms(5_000);
    config
}

/// Mounts a guest-session endpoint that issues the given token.
pub async fn mount_guest_session(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/guest"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}
