// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{ComplaintInput, Reporter};

/// Checks whether an email address is well formed.
///
/// The accepted shape matches the common HTML-form pattern: a local
/// part and a domain separated by a single `@`, no whitespace, and at
/// least one dot inside the domain with characters on both sides.
/// This is intentionally not a full RFC 5322 parser.
#[must_use]
pub fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates that a complaint input's field constraints are met.
///
/// This function checks that required free-text fields are not blank
/// and that an identified reporter carries usable contact data. It
/// does NOT check the incident date against the submission date (that
/// requires a clock and belongs to the boundary that stamps the
/// submission time).
///
/// # Arguments
///
/// * `input` - The complaint input to validate
///
/// # Returns
///
/// * `Ok(())` if the input's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The title, description, incident date, address, or city is blank
/// - The reporter is identified but the name, phone, or email is blank
/// - The reporter email is not well formed
pub fn validate_complaint_input(input: &ComplaintInput) -> Result<(), DomainError> {
    if input.title.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "title" });
    }
    if input.description.trim().is_empty() {
        return Err(DomainError::EmptyField {
            field: "description",
        });
    }
    if input.incident_date.trim().is_empty() {
        return Err(DomainError::EmptyField {
            field: "incident_date",
        });
    }
    if input.address.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "address" });
    }
    if input.city.trim().is_empty() {
        return Err(DomainError::EmptyField { field: "city" });
    }

    // Rule: an identified reporter must be reachable
    if let Reporter::Identified { name, phone, email } = &input.reporter {
        if name.trim().is_empty() {
            return Err(DomainError::MissingReporterField {
                field: "reporter_name",
            });
        }
        if phone.trim().is_empty() {
            return Err(DomainError::MissingReporterField {
                field: "reporter_phone",
            });
        }
        if email.trim().is_empty() {
            return Err(DomainError::MissingReporterField {
                field: "reporter_email",
            });
        }
        if !is_well_formed_email(email) {
            return Err(DomainError::MalformedEmail {
                value: email.clone(),
            });
        }
    }

    Ok(())
}

/// Validates that an incident date does not lie after the submission
/// date.
///
/// Both arguments are ISO 8601 date strings, so the comparison is
/// lexicographic.
///
/// # Arguments
///
/// * `incident_date` - The incident date (ISO 8601 date)
/// * `submission_date` - The submission date (ISO 8601 date)
///
/// # Errors
///
/// Returns `DomainError::IncidentDateInFuture` if the incident date
/// is after the submission date.
pub fn validate_incident_date(
    incident_date: &str,
    submission_date: &str,
) -> Result<(), DomainError> {
    if incident_date > submission_date {
        return Err(DomainError::IncidentDateInFuture {
            incident_date: incident_date.to_string(),
            submission_date: submission_date.to_string(),
        });
    }
    Ok(())
}
