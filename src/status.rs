// 📌 Application Status - Closed set of pipeline stages
//
// Every tracked company sits in exactly one stage. The short code is what
// users type and what gets stored; the description is what gets displayed.

use crate::error::{RecordError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// STATUS CODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusCode {
    /// PA - application not yet submitted
    PendingApplication,

    /// PI - waiting on an interview
    PendingInterview,

    /// PO - interviewed, waiting on the outcome
    PendingOutcome,

    /// A - offer received
    Accepted,

    /// R - turned down
    Rejected,
}

impl StatusCode {
    /// Every status in pipeline order
    pub const ALL: [StatusCode; 5] = [
        StatusCode::PendingApplication,
        StatusCode::PendingInterview,
        StatusCode::PendingOutcome,
        StatusCode::Accepted,
        StatusCode::Rejected,
    ];

    /// Parse a status code, ignoring letter case. Whitespace is not trimmed.
    pub fn parse(text: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.code().eq_ignore_ascii_case(text))
            .ok_or_else(|| RecordError::invalid_format("application status", Self::constraints()))
    }

    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatusCode::PendingApplication => "PA",
            StatusCode::PendingInterview => "PI",
            StatusCode::PendingOutcome => "PO",
            StatusCode::Accepted => "A",
            StatusCode::Rejected => "R",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatusCode::PendingApplication => "PENDING APPLICATION",
            StatusCode::PendingInterview => "PENDING INTERVIEW",
            StatusCode::PendingOutcome => "PENDING OUTCOME",
            StatusCode::Accepted => "ACCEPTED",
            StatusCode::Rejected => "REJECTED",
        }
    }

    /// Constraint message listing every valid code with its description
    ///
    /// Example: "Valid statuses are: PA (PENDING APPLICATION), ..., R (REJECTED)"
    pub fn constraints() -> String {
        let options = Self::ALL
            .iter()
            .map(|status| format!("{} ({})", status.code(), status.description()))
            .collect::<Vec<_>>()
            .join(", ");
        format!("please enter a valid application status. Valid statuses are: {options}")
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for StatusCode {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StatusCode {
    type Error = RecordError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<StatusCode> for String {
    fn from(status: StatusCode) -> Self {
        status.code().to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_every_code_in_any_case() {
        let cases = [
            ("PA", StatusCode::PendingApplication),
            ("pi", StatusCode::PendingInterview),
            ("Po", StatusCode::PendingOutcome),
            ("a", StatusCode::Accepted),
            ("R", StatusCode::Rejected),
        ];

        for (input, expected) in cases {
            assert_eq!(StatusCode::parse(input).unwrap(), expected);
            assert!(StatusCode::is_valid(input));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        for input in ["", "P", "PX", "ACCEPTED", " PA", "PA ", "RR"] {
            assert!(!StatusCode::is_valid(input), "{input:?} should be invalid");

            match StatusCode::parse(input) {
                Err(RecordError::InvalidFormat { field, message }) => {
                    assert_eq!(field, "application status");
                    assert!(message.contains("PA (PENDING APPLICATION)"));
                    assert!(message.contains("R (REJECTED)"));
                }
                other => panic!("expected InvalidFormat, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_constraints_enumerate_all_statuses() {
        let message = StatusCode::constraints();
        for status in StatusCode::ALL {
            assert!(message.contains(&format!("{} ({})", status.code(), status.description())));
        }
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(StatusCode::PendingOutcome.to_string(), "PO");
        assert_eq!(StatusCode::Accepted.description(), "ACCEPTED");
    }

    #[test]
    fn test_equality_is_by_member() {
        use std::collections::HashSet;

        let set: HashSet<StatusCode> = ["pa", "PA", "Pa"]
            .into_iter()
            .map(|code| code.parse().unwrap())
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_deserialize_validates() {
        let status: StatusCode = serde_json::from_str("\"pi\"").unwrap();
        assert_eq!(status, StatusCode::PendingInterview);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"PI\"");

        assert!(serde_json::from_str::<StatusCode>("\"XX\"").is_err());
    }
}
