// File: probe.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::Method;
use serde_json::Value;

/// Request body of a probe. Structured bodies are serialized to JSON at
/// dispatch time; raw bodies go over the wire byte for byte, malformed
/// or empty as they may be.
#[derive(Debug, Clone)]
pub enum ProbeBody {
    Json(Value),
    Raw(String),
}

/// One adversarial request: method, path, optional body, extra headers
/// and a human-readable description for the report line. Immutable once
/// built.
#[derive(Debug, Clone)]
pub struct Probe {
    method: Method,
    path: String,
    body: Option<ProbeBody>,
    headers: Vec<(String, String)>,
    description: String,
}

impl Probe {
    pub fn new(method: Method, path: &str, description: impl Into<String>) -> Self {
        Probe {
            method,
            path: path.to_string(),
            body: None,
            headers: Vec::new(),
            description: description.into(),
        }
    }

    pub fn with_json_body(mut self, body: Value) -> Self {
        self.body = Some(ProbeBody::Json(body));
        self
    }

    pub fn with_raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(ProbeBody::Raw(body.into()));
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&ProbeBody> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(header, _)| header.eq_ignore_ascii_case(name))
    }
}
