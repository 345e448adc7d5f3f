// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form-level validation of complaint submissions.
//!
//! Validation collects every field error in one pass, so a submitter
//! sees all problems at once instead of fixing them one by one.

use crate::request_response::SubmitComplaintRequest;
use denuncia_domain::{is_well_formed_email, validate_incident_date};
use thiserror::Error;

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// The offending field.
    pub field: &'static str,
    /// The message to show next to the field.
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Validates a submission request, collecting every field error.
///
/// Required fields must be non-blank; reporter contact fields are
/// required only when the submission is not anonymous; the email must
/// be well formed; and the incident date must not lie after the
/// submission date (both ISO 8601 date strings).
///
/// # Arguments
///
/// * `request` - The submission request to validate
/// * `submission_date` - The submission date (ISO 8601 date)
///
/// # Returns
///
/// Every field error found, in form order. An empty vector means the
/// request is valid.
#[must_use]
pub fn validate_submission(
    request: &SubmitComplaintRequest,
    submission_date: &str,
) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();

    if request.category.trim().is_empty() {
        errors.push(FieldError::new("category", "Select a complaint category"));
    }
    if request.title.trim().is_empty() {
        errors.push(FieldError::new("title", "The title is required"));
    }
    if request.description.trim().is_empty() {
        errors.push(FieldError::new("description", "The description is required"));
    }
    if request.incident_date.trim().is_empty() {
        errors.push(FieldError::new(
            "incident_date",
            "The incident date is required",
        ));
    } else if validate_incident_date(&request.incident_date, submission_date).is_err() {
        errors.push(FieldError::new(
            "incident_date",
            "The incident date cannot be in the future",
        ));
    }
    if request.address.trim().is_empty() {
        errors.push(FieldError::new("address", "The address is required"));
    }
    if request.city.trim().is_empty() {
        errors.push(FieldError::new("city", "The city is required"));
    }

    if !request.is_anonymous {
        if request.reporter_name.trim().is_empty() {
            errors.push(FieldError::new(
                "reporter_name",
                "The reporter name is required when the complaint is not anonymous",
            ));
        }
        if request.reporter_phone.trim().is_empty() {
            errors.push(FieldError::new(
                "reporter_phone",
                "The contact phone is required when the complaint is not anonymous",
            ));
        }
        if request.reporter_email.trim().is_empty() {
            errors.push(FieldError::new(
                "reporter_email",
                "The contact email is required when the complaint is not anonymous",
            ));
        } else if !is_well_formed_email(&request.reporter_email) {
            errors.push(FieldError::new(
                "reporter_email",
                "Enter a valid email address",
            ));
        }
    }

    errors
}
