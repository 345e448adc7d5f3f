// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Category, ComplaintRecord, Priority, Status};
use serde::{Deserialize, Serialize};

/// The criteria set narrowing the visible complaint list.
///
/// Criteria are conjunctive: a record is kept only if it passes every
/// set criterion. Unset criteria are vacuously true, so the default
/// value keeps every record. Filtering never mutates or reorders the
/// underlying list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep only records with exactly this category.
    pub category: Option<Category>,
    /// Keep only records with exactly this priority.
    pub priority: Option<Priority>,
    /// Keep only records with exactly this status.
    pub status: Option<Status>,
    /// Keep only records whose city contains this value,
    /// case-insensitively.
    pub city: Option<String>,
    /// Keep only records whose incident date is on or after this ISO
    /// 8601 date.
    pub date_from: Option<String>,
    /// Keep only records whose incident date is on or before this ISO
    /// 8601 date.
    pub date_to: Option<String>,
    /// Keep only records whose title or description contains this
    /// value, case-insensitively.
    pub search: Option<String>,
    /// Keep only anonymous records.
    pub anonymous_only: bool,
}

impl FilterCriteria {
    /// Checks whether a single record passes every set criterion.
    ///
    /// Incident dates are ISO 8601 date strings, so the range checks
    /// compare lexicographically. An empty string in a criterion
    /// behaves like an unset criterion.
    #[must_use]
    pub fn matches(&self, complaint: &ComplaintRecord) -> bool {
        if self
            .category
            .is_some_and(|category| category != complaint.category)
        {
            return false;
        }
        if self
            .priority
            .is_some_and(|priority| priority != complaint.priority)
        {
            return false;
        }
        if self.status.is_some_and(|status| status != complaint.status) {
            return false;
        }
        if let Some(city) = &self.city {
            if !complaint
                .city
                .to_lowercase()
                .contains(&city.to_lowercase())
            {
                return false;
            }
        }
        if let Some(from) = &self.date_from {
            if complaint.incident_date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if complaint.incident_date.as_str() > to.as_str() {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle: String = search.to_lowercase();
            let in_title: bool = complaint.title.to_lowercase().contains(&needle);
            let in_description: bool = complaint.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }
        if self.anonymous_only && !complaint.reporter.is_anonymous() {
            return false;
        }
        true
    }
}

/// Produces the filtered view of a complaint list.
///
/// This function is pure: it borrows the records, keeps the input
/// order, and can be re-derived at any time from the current list and
/// criteria. An empty list yields an empty view for any criteria.
///
/// # Arguments
///
/// * `complaints` - The full complaint list, newest first
/// * `criteria` - The criteria set to apply
#[must_use]
pub fn filter_complaints<'a>(
    complaints: &'a [ComplaintRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ComplaintRecord> {
    complaints
        .iter()
        .filter(|complaint| criteria.matches(complaint))
        .collect()
}
