// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_input;
use crate::{
    Category, ComplaintInput, ComplaintRecord, DomainError, Priority, ReferenceCode, Reporter,
    Status,
};

#[test]
fn test_category_parse_round_trip() {
    for category in Category::ALL {
        let parsed: Category = Category::parse(category.as_str()).unwrap();
        assert_eq!(parsed, category);
    }
}

#[test]
fn test_category_parse_rejects_unknown_value() {
    let result: Result<Category, DomainError> = Category::parse("Vandalism");
    assert!(matches!(
        result,
        Err(DomainError::UnknownCategory(value)) if value == "Vandalism"
    ));
}

#[test]
fn test_category_display_matches_as_str() {
    assert_eq!(
        format!("{}", Category::AbuseOfAuthority),
        "Abuse of Authority"
    );
    assert_eq!(format!("{}", Category::PublicServices), "Public Services");
}

#[test]
fn test_priority_parse_round_trip() {
    for priority in Priority::ALL {
        let parsed: Priority = Priority::parse(priority.as_str()).unwrap();
        assert_eq!(parsed, priority);
    }
}

#[test]
fn test_priority_default_is_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn test_priority_parse_rejects_unknown_value() {
    let result: Result<Priority, DomainError> = Priority::parse("Critical");
    assert!(matches!(result, Err(DomainError::UnknownPriority(_))));
}

#[test]
fn test_status_parse_round_trip() {
    for status in Status::ALL {
        let parsed: Status = Status::parse(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn test_status_default_is_pending() {
    assert_eq!(Status::default(), Status::Pending);
}

#[test]
fn test_status_parse_rejects_unknown_value() {
    let result: Result<Status, DomainError> = Status::parse("Closed");
    assert!(matches!(result, Err(DomainError::UnknownStatus(_))));
}

#[test]
fn test_anonymous_reporter_exposes_no_contact_data() {
    let reporter: Reporter = Reporter::Anonymous;
    assert!(reporter.is_anonymous());
    assert_eq!(reporter.name(), None);
    assert_eq!(reporter.phone(), None);
    assert_eq!(reporter.email(), None);
}

#[test]
fn test_identified_reporter_exposes_contact_data() {
    let reporter: Reporter = Reporter::Identified {
        name: String::from("María López"),
        phone: String::from("4771234567"),
        email: String::from("maria@example.com"),
    };
    assert!(!reporter.is_anonymous());
    assert_eq!(reporter.name(), Some("María López"));
    assert_eq!(reporter.phone(), Some("4771234567"));
    assert_eq!(reporter.email(), Some("maria@example.com"));
}

#[test]
fn test_record_from_input_stamps_creation_fields() {
    let input: ComplaintInput = create_test_input();
    let reference_code: ReferenceCode = ReferenceCode::new(2025, 7);
    let record: ComplaintRecord = ComplaintRecord::from_input(
        input.clone(),
        7,
        reference_code.clone(),
        String::from("2025-03-01T10:00:00.000000000Z"),
    );

    assert_eq!(record.id, 7);
    assert_eq!(record.reference_code, reference_code);
    assert_eq!(record.status, Status::Pending);
    assert_eq!(record.registered_at, "2025-03-01T10:00:00.000000000Z");
    assert_eq!(record.category, input.category);
    assert_eq!(record.title, input.title);
    assert_eq!(record.priority, input.priority);
    assert_eq!(record.attached_file_names, input.attached_file_names);
}
