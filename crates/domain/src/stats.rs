// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Category, ComplaintRecord, Status};
use serde::{Deserialize, Serialize};

/// Summary statistics over the complete, unfiltered complaint list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintStatistics {
    /// Count of all records.
    pub total: usize,
    /// Count of records with status `Pending`.
    pub pending: usize,
    /// Count of records with status `Resolved`.
    pub resolved: usize,
    /// The category with the highest occurrence count, or `None` for
    /// an empty list. Ties resolve to the category seen first.
    pub most_common_category: Option<Category>,
}

/// Computes summary statistics over a complaint list.
///
/// Statistics are always derived from the complete list, independent
/// of any active filter criteria. The most-common-category tie-break
/// is first-seen: a category replaces the current best only with a
/// strictly greater count, so the winner is deterministic in list
/// order.
///
/// # Arguments
///
/// * `complaints` - The full complaint list
#[must_use]
pub fn compute_statistics(complaints: &[ComplaintRecord]) -> ComplaintStatistics {
    let total: usize = complaints.len();
    let pending: usize = complaints
        .iter()
        .filter(|complaint| complaint.status == Status::Pending)
        .count();
    let resolved: usize = complaints
        .iter()
        .filter(|complaint| complaint.status == Status::Resolved)
        .count();

    // Tally categories in first-occurrence order
    let mut tally: Vec<(Category, usize)> = Vec::new();
    for complaint in complaints {
        match tally
            .iter_mut()
            .find(|(category, _)| *category == complaint.category)
        {
            Some((_, count)) => *count += 1,
            None => tally.push((complaint.category, 1)),
        }
    }

    let mut most_common_category: Option<Category> = None;
    let mut best_count: usize = 0;
    for (category, count) in tally {
        if count > best_count {
            most_common_category = Some(category);
            best_count = count;
        }
    }

    ComplaintStatistics {
        total,
        pending,
        resolved,
        most_common_category,
    }
}
