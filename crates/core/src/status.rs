//! Algorithm lifecycle status values.
//!
//! Statuses are stored as plain strings in the `ml_algorithm_statuses`
//! table; the repository layer validates incoming values against this
//! enum before insert, so the database never sees anything outside the
//! recognized set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle stage of an algorithm version on an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmStatus {
    Testing,
    Staging,
    Production,
    AbTesting,
}

impl AlgorithmStatus {
    /// All recognized statuses, in lifecycle order.
    pub const ALL: [AlgorithmStatus; 4] = [
        AlgorithmStatus::Testing,
        AlgorithmStatus::Staging,
        AlgorithmStatus::Production,
        AlgorithmStatus::AbTesting,
    ];

    /// The database representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmStatus::Testing => "testing",
            AlgorithmStatus::Staging => "staging",
            AlgorithmStatus::Production => "production",
            AlgorithmStatus::AbTesting => "ab_testing",
        }
    }
}

impl fmt::Display for AlgorithmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "testing" => Ok(AlgorithmStatus::Testing),
            "staging" => Ok(AlgorithmStatus::Staging),
            "production" => Ok(AlgorithmStatus::Production),
            "ab_testing" => Ok(AlgorithmStatus::AbTesting),
            other => {
                let expected = AlgorithmStatus::ALL.map(AlgorithmStatus::as_str).join(", ");
                Err(CoreError::Validation(format!(
                    "unknown algorithm status {other:?}, expected one of: {expected}"
                )))
            }
        }
    }
}
