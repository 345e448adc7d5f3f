// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::validation::FieldError;
use denuncia_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The session is not authenticated.
    NotAuthenticated {
        /// The action that was attempted.
        action: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::NotAuthenticated { action } => {
                write!(f, "Not authenticated: '{action}' requires a logged-in session")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API
/// contract. None of them is fatal: every error is recoverable by the
/// caller correcting the input or logging in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The session is not authenticated.
    NotAuthenticated {
        /// The action that was attempted.
        action: String,
    },
    /// A submission failed form-level validation.
    ValidationFailed {
        /// Every field error found, in form order.
        errors: Vec<FieldError>,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::NotAuthenticated { action } => {
                write!(f, "Not authenticated: '{action}' requires a logged-in session")
            }
            Self::ValidationFailed { errors } => {
                write!(f, "Validation failed: {} field error(s)", errors.len())
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::NotAuthenticated { action } => Self::NotAuthenticated { action },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not
/// leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownCategory(value) => ApiError::InvalidInput {
            field: String::from("category"),
            message: format!("Unknown complaint category: '{value}'"),
        },
        DomainError::UnknownPriority(value) => ApiError::InvalidInput {
            field: String::from("priority"),
            message: format!("Unknown priority: '{value}'"),
        },
        DomainError::UnknownStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown status: '{value}'"),
        },
        DomainError::EmptyField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("The field must not be empty"),
        },
        DomainError::MissingReporterField { field } => ApiError::InvalidInput {
            field: field.to_string(),
            message: String::from("Required when the complaint is not anonymous"),
        },
        DomainError::MalformedEmail { value } => ApiError::InvalidInput {
            field: String::from("reporter_email"),
            message: format!("Malformed email address: '{value}'"),
        },
        DomainError::IncidentDateInFuture {
            incident_date,
            submission_date,
        } => ApiError::InvalidInput {
            field: String::from("incident_date"),
            message: format!(
                "Incident date {incident_date} is after the submission date {submission_date}"
            ),
        },
        DomainError::TimestampFormat { reason } => ApiError::Internal { message: reason },
    }
}
