// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_complaint;
use crate::{
    Category, ComplaintRecord, FilterCriteria, Priority, Reporter, Status, filter_complaints,
};

fn create_test_list() -> Vec<ComplaintRecord> {
    let mut corruption: ComplaintRecord =
        create_test_complaint(3, Category::Corruption, Status::Pending);
    corruption.title = String::from("Bribe requested at permit office");
    corruption.city = String::from("león centro");
    corruption.incident_date = String::from("2024-06-15");
    corruption.priority = Priority::High;

    let mut negligence: ComplaintRecord =
        create_test_complaint(2, Category::Negligence, Status::Resolved);
    negligence.description = String::from("Road damage ignored for months");
    negligence.city = String::from("Guadalajara");
    negligence.incident_date = String::from("2024-07-01");
    negligence.reporter = Reporter::Identified {
        name: String::from("Juan Pérez"),
        phone: String::from("3311234567"),
        email: String::from("juan@example.com"),
    };

    let mut services: ComplaintRecord =
        create_test_complaint(1, Category::PublicServices, Status::UnderReview);
    services.title = String::from("Street lighting out for weeks");
    services.city = String::from("Monterrey");
    services.incident_date = String::from("2024-05-20");
    services.priority = Priority::Low;

    vec![corruption, negligence, services]
}

#[test]
fn test_empty_criteria_keep_every_record_in_order() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria::default();

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 3);
    assert_eq!(filtered[0].id, 3);
    assert_eq!(filtered[1].id, 2);
    assert_eq!(filtered[2].id, 1);
}

#[test]
fn test_category_filter_is_exact() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        category: Some(Category::Negligence),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].category, Category::Negligence);
}

#[test]
fn test_priority_filter_is_exact() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        priority: Some(Priority::Low),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);
}

#[test]
fn test_status_filter_is_exact() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        status: Some(Status::Resolved),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 2);
}

#[test]
fn test_city_filter_matches_case_insensitive_substring() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        city: Some(String::from("León")),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].city, "león centro");
}

#[test]
fn test_date_range_is_inclusive_and_excludes_later_incidents() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        date_from: Some(String::from("2024-06-01")),
        date_to: Some(String::from("2024-06-30")),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    // 2024-07-01 and 2024-05-20 both fall outside the range
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].incident_date, "2024-06-15");
}

#[test]
fn test_date_range_bounds_are_inclusive() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        date_from: Some(String::from("2024-06-15")),
        date_to: Some(String::from("2024-06-15")),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].incident_date, "2024-06-15");
}

#[test]
fn test_search_matches_title_or_description_case_insensitive() {
    let complaints: Vec<ComplaintRecord> = create_test_list();

    let by_title: Vec<&ComplaintRecord> = filter_complaints(
        &complaints,
        &FilterCriteria {
            search: Some(String::from("BRIBE")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, 3);

    let by_description: Vec<&ComplaintRecord> = filter_complaints(
        &complaints,
        &FilterCriteria {
            search: Some(String::from("road damage")),
            ..FilterCriteria::default()
        },
    );
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].id, 2);
}

#[test]
fn test_anonymous_only_filter_keeps_anonymous_records() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        anonymous_only: true,
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|c| c.reporter.is_anonymous()));
}

#[test]
fn test_criteria_are_conjunctive() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        category: Some(Category::Corruption),
        status: Some(Status::Resolved),
        ..FilterCriteria::default()
    };

    // The corruption record is Pending, the resolved record is Negligence
    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);
    assert!(filtered.is_empty());
}

#[test]
fn test_filtering_is_idempotent() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        anonymous_only: true,
        ..FilterCriteria::default()
    };

    let once: Vec<ComplaintRecord> = filter_complaints(&complaints, &criteria)
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<&ComplaintRecord> = filter_complaints(&once, &criteria);

    assert_eq!(twice.len(), once.len());
    for (a, b) in once.iter().zip(twice) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_empty_list_yields_empty_view_for_any_criteria() {
    let complaints: Vec<ComplaintRecord> = Vec::new();
    let unrestricted: Vec<&ComplaintRecord> =
        filter_complaints(&complaints, &FilterCriteria::default());
    assert!(unrestricted.is_empty());

    let restricted: Vec<&ComplaintRecord> = filter_complaints(
        &complaints,
        &FilterCriteria {
            category: Some(Category::Other),
            anonymous_only: true,
            ..FilterCriteria::default()
        },
    );
    assert!(restricted.is_empty());
}

#[test]
fn test_empty_string_criteria_behave_as_unset() {
    let complaints: Vec<ComplaintRecord> = create_test_list();
    let criteria: FilterCriteria = FilterCriteria {
        city: Some(String::new()),
        date_from: Some(String::new()),
        search: Some(String::new()),
        ..FilterCriteria::default()
    };

    let filtered: Vec<&ComplaintRecord> = filter_complaints(&complaints, &criteria);
    assert_eq!(filtered.len(), complaints.len());
}
