// SPDX-License-Identifier: MIT
//! Status value objects shared by calculators and the aggregator.

use serde::{Deserialize, Serialize};

/// Severity of a reported status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Everything fine.
    Ok,
    /// Something needs attention but the system is functional.
    Warning,
    /// Something is broken.
    Error,
}

impl Status {
    /// Returns the worse (higher-severity) of two statuses: ERROR > WARNING > OK.
    pub fn worst(a: Status, b: Status) -> Status {
        match (a, b) {
            (Status::Error, _) | (_, Status::Error) => Status::Error,
            (Status::Warning, _) | (_, Status::Warning) => Status::Warning,
            _ => Status::Ok,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::Warning => write!(f, "WARNING"),
            Status::Error => write!(f, "ERROR"),
        }
    }
}

/// A single named status with a human-readable message.
///
/// Produced fresh on every evaluation, both per job and as the composite
/// report handed to the health endpoint layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDetail {
    /// Name of the reported unit (a job name, or `"Jobs"` for the composite).
    pub name: String,
    pub status: Status,
    /// Human-readable description of the status.
    pub message: String,
}

impl StatusDetail {
    /// Build a detail with an explicit status.
    pub fn new(name: impl Into<String>, status: Status, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
        }
    }

    pub fn ok(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Ok, message)
    }

    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Warning, message)
    }

    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, Status::Error, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_prefers_error_over_warning_over_ok() {
        assert_eq!(Status::worst(Status::Ok, Status::Ok), Status::Ok);
        assert_eq!(Status::worst(Status::Ok, Status::Warning), Status::Warning);
        assert_eq!(Status::worst(Status::Warning, Status::Error), Status::Error);
        assert_eq!(Status::worst(Status::Error, Status::Ok), Status::Error);
    }

    #[test]
    fn test_worst_is_commutative() {
        for a in [Status::Ok, Status::Warning, Status::Error] {
            for b in [Status::Ok, Status::Warning, Status::Error] {
                assert_eq!(Status::worst(a, b), Status::worst(b, a));
            }
        }
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Status::Warning).unwrap(), "\"WARNING\"");
    }

    #[test]
    fn test_detail_json_shape() {
        let detail = StatusDetail::ok("Jobs", "all good");
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "Jobs");
        assert_eq!(json["status"], "OK");
        assert_eq!(json["message"], "all good");
    }
}
