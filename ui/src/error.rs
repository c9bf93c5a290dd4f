use serde::Serialize;
use thiserror::Error;

/// One field that did not match the declared item shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeIssue {
    /// JSON path of the offending value, e.g. `[2].ariaLabel`.
    pub path: String,
    pub expected: &'static str,
    pub found: String,
}

/// Every issue found while decoding a payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{}", issues_json(.issues))]
pub struct DecodeError {
    pub issues: Vec<DecodeIssue>,
}

impl DecodeError {
    pub fn single(path: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            issues: vec![DecodeIssue {
                path: path.into(),
                expected,
                found: found.into(),
            }],
        }
    }

    pub fn merge(&mut self, other: DecodeError) {
        self.issues.extend(other.issues);
    }

    pub fn to_json(&self) -> String {
        issues_json(&self.issues)
    }
}

fn issues_json(issues: &[DecodeIssue]) -> String {
    serde_json::to_string(issues).unwrap_or_else(|_| format!("{issues:?}"))
}

/// Why a remote list could not be loaded. All variants are recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON: {reason}")]
    Parse { url: String, reason: String },

    #[error("response from {url} does not match the expected shape: {source}")]
    Decode {
        url: String,
        #[source]
        source: DecodeError,
    },
}
