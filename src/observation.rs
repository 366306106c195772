// File: observation.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

/// Status value reported when the transport itself failed and no HTTP
/// status exists.
pub const SENTINEL_STATUS: i32 = -1;

/// Outcome of dispatching one probe. A completed HTTP exchange and a
/// transport-level failure are the only two states; callers branch on
/// the variant, nothing is thrown across this boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Completed { status: u16, body: String },
    Failed { error: String },
}

impl Observation {
    pub fn completed(status: u16, body: impl Into<String>) -> Self {
        Observation::Completed {
            status,
            body: body.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Observation::Failed {
            error: error.into(),
        }
    }

    /// Observed HTTP status, or -1 when the transport failed.
    pub fn status_code(&self) -> i32 {
        match self {
            Observation::Completed { status, .. } => i32::from(*status),
            Observation::Failed { .. } => SENTINEL_STATUS,
        }
    }

    /// Response body on a completed exchange, error text on a failure.
    pub fn text(&self) -> &str {
        match self {
            Observation::Completed { body, .. } => body,
            Observation::Failed { error } => error,
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Observation::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_passes_status_through() {
        let observation = Observation::completed(404, "not found");

        assert_eq!(observation.status_code(), 404);
        assert_eq!(observation.text(), "not found");
        assert!(!observation.is_transport_failure());
    }

    #[test]
    fn test_failure_reports_sentinel() {
        let observation = Observation::failed("connection refused");

        assert_eq!(observation.status_code(), SENTINEL_STATUS);
        assert_eq!(observation.text(), "connection refused");
        assert!(observation.is_transport_failure());
    }
}
