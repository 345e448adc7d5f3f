// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The category value is not one of the fixed category set.
    UnknownCategory(String),
    /// The priority value is not one of the fixed priority set.
    UnknownPriority(String),
    /// The status value is not one of the fixed status set.
    UnknownStatus(String),
    /// A required field is empty.
    EmptyField {
        /// The name of the empty field.
        field: &'static str,
    },
    /// A reporter field is missing on a non-anonymous complaint.
    MissingReporterField {
        /// The name of the missing reporter field.
        field: &'static str,
    },
    /// The reporter email address is not well formed.
    MalformedEmail {
        /// The rejected email value.
        value: String,
    },
    /// The incident date lies after the submission date.
    IncidentDateInFuture {
        /// The incident date (ISO 8601 date).
        incident_date: String,
        /// The submission date (ISO 8601 date).
        submission_date: String,
    },
    /// Failed to format a submission timestamp.
    TimestampFormat {
        /// The formatting error message.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(value) => {
                write!(f, "Unknown complaint category: '{value}'")
            }
            Self::UnknownPriority(value) => {
                write!(f, "Unknown priority: '{value}'")
            }
            Self::UnknownStatus(value) => {
                write!(f, "Unknown status: '{value}'")
            }
            Self::EmptyField { field } => {
                write!(f, "Required field '{field}' is empty")
            }
            Self::MissingReporterField { field } => {
                write!(
                    f,
                    "Field '{field}' is required when the complaint is not anonymous"
                )
            }
            Self::MalformedEmail { value } => {
                write!(f, "Malformed email address: '{value}'")
            }
            Self::IncidentDateInFuture {
                incident_date,
                submission_date,
            } => {
                write!(
                    f,
                    "Incident date {incident_date} is after the submission date {submission_date}"
                )
            }
            Self::TimestampFormat { reason } => {
                write!(f, "Failed to format submission timestamp: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
