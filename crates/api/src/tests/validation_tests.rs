// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::SubmitComplaintRequest;
use crate::tests::helpers::create_valid_request;
use crate::validation::{FieldError, validate_submission};

const SUBMISSION_DATE: &str = "2024-06-30";

fn create_blank_request() -> SubmitComplaintRequest {
    SubmitComplaintRequest {
        category: String::new(),
        title: String::new(),
        description: String::new(),
        incident_date: String::new(),
        incident_time: None,
        address: String::new(),
        neighborhood: None,
        city: String::new(),
        is_anonymous: true,
        reporter_name: String::new(),
        reporter_phone: String::new(),
        reporter_email: String::new(),
        attached_file_names: Vec::new(),
        involved_authorities: None,
        witnesses: None,
        priority: String::new(),
    }
}

#[test]
fn test_valid_anonymous_request_has_no_errors() {
    let request: SubmitComplaintRequest = create_valid_request();

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);
    assert!(errors.is_empty());
}

#[test]
fn test_blank_request_collects_every_required_field_error() {
    let request: SubmitComplaintRequest = create_blank_request();

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);

    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "category",
            "title",
            "description",
            "incident_date",
            "address",
            "city"
        ]
    );
}

#[test]
fn test_anonymous_request_skips_reporter_fields() {
    let request: SubmitComplaintRequest = create_blank_request();

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);
    assert!(errors.iter().all(|e| !e.field.starts_with("reporter")));
}

#[test]
fn test_non_anonymous_request_requires_reporter_fields() {
    let mut request: SubmitComplaintRequest = create_valid_request();
    request.is_anonymous = false;

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);

    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["reporter_name", "reporter_phone", "reporter_email"]
    );
}

#[test]
fn test_blank_reporter_email_reports_required_message() {
    let mut request: SubmitComplaintRequest = create_valid_request();
    request.is_anonymous = false;
    request.reporter_name = String::from("María López");
    request.reporter_phone = String::from("4771234567");

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "reporter_email");
    assert_eq!(
        errors[0].message,
        "The contact email is required when the complaint is not anonymous"
    );
}

#[test]
fn test_malformed_reporter_email_reports_pattern_message() {
    let mut request: SubmitComplaintRequest = create_valid_request();
    request.is_anonymous = false;
    request.reporter_name = String::from("María López");
    request.reporter_phone = String::from("4771234567");
    request.reporter_email = String::from("maria-at-example.com");

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "reporter_email");
    assert_eq!(errors[0].message, "Enter a valid email address");
}

#[test]
fn test_future_incident_date_is_rejected() {
    let mut request: SubmitComplaintRequest = create_valid_request();
    request.incident_date = String::from("2024-07-01");

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "incident_date");
    assert_eq!(errors[0].message, "The incident date cannot be in the future");
}

#[test]
fn test_incident_on_submission_date_is_accepted() {
    let mut request: SubmitComplaintRequest = create_valid_request();
    request.incident_date = String::from(SUBMISSION_DATE);

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);
    assert!(errors.is_empty());
}

#[test]
fn test_whitespace_only_fields_count_as_blank() {
    let mut request: SubmitComplaintRequest = create_valid_request();
    request.title = String::from("   ");

    let errors: Vec<FieldError> = validate_submission(&request, SUBMISSION_DATE);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "title");
}
