// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These types are distinct from domain types and represent the API
//! contract: everything is a plain string or flag the way a form
//! submits it, and responses carry display-ready values.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

/// API request to open the administrative session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The submitted username.
    pub username: String,
    /// The submitted password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// A success message.
    pub message: String,
}

/// API response for a logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    /// A success message.
    pub message: String,
}

/// API request to submit a new complaint.
///
/// Fields mirror the public intake form. The reporter contact fields
/// are meaningful only when `is_anonymous` is false; anonymity is the
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitComplaintRequest {
    /// The complaint category.
    pub category: String,
    /// A short title summarizing the complaint.
    pub title: String,
    /// The detailed description of the facts.
    pub description: String,
    /// The date of the incident (ISO 8601 date string).
    pub incident_date: String,
    /// The approximate time of the incident (optional).
    #[serde(default)]
    pub incident_time: Option<String>,
    /// The street address where the incident took place.
    pub address: String,
    /// The neighborhood (optional).
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// The city or municipality.
    pub city: String,
    /// Whether the submitter wishes to stay anonymous. Defaults to
    /// true.
    #[serde(default = "default_true")]
    pub is_anonymous: bool,
    /// The reporter's full name (required when not anonymous).
    #[serde(default)]
    pub reporter_name: String,
    /// The reporter's contact phone (required when not anonymous).
    #[serde(default)]
    pub reporter_phone: String,
    /// The reporter's contact email (required when not anonymous).
    #[serde(default)]
    pub reporter_email: String,
    /// Names of attached evidence files.
    #[serde(default)]
    pub attached_file_names: Vec<String>,
    /// Authorities involved in the incident (optional free text).
    #[serde(default)]
    pub involved_authorities: Option<String>,
    /// Witnesses of the incident (optional free text).
    #[serde(default)]
    pub witnesses: Option<String>,
    /// The chosen priority; an empty value resolves to Medium.
    #[serde(default)]
    pub priority: String,
}

/// API response for a successful complaint submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitComplaintResponse {
    /// The reference code assigned to the complaint.
    pub reference_code: String,
    /// A success message quoting the reference code.
    pub message: String,
}

/// API response for dismissing the submission notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissNotificationResponse {
    /// A success message.
    pub message: String,
}

/// API response carrying the pending submission notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    /// The reference code of the last submission, or `None` when no
    /// notice is pending.
    pub reference_code: Option<String>,
}

/// API request to list complaints through the review surface.
///
/// Every criterion is optional; an absent or empty value places no
/// restriction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListComplaintsRequest {
    /// Keep only complaints with exactly this category.
    #[serde(default)]
    pub category: Option<String>,
    /// Keep only complaints with exactly this priority.
    #[serde(default)]
    pub priority: Option<String>,
    /// Keep only complaints with exactly this status.
    #[serde(default)]
    pub status: Option<String>,
    /// Keep only complaints whose city contains this value.
    #[serde(default)]
    pub city: Option<String>,
    /// Keep only complaints whose incident date is on or after this
    /// ISO 8601 date.
    #[serde(default)]
    pub date_from: Option<String>,
    /// Keep only complaints whose incident date is on or before this
    /// ISO 8601 date.
    #[serde(default)]
    pub date_to: Option<String>,
    /// Keep only complaints whose title or description contains this
    /// value.
    #[serde(default)]
    pub search: Option<String>,
    /// Keep only anonymous complaints.
    #[serde(default)]
    pub anonymous_only: bool,
}

/// Complaint information for listing.
///
/// Reporter contact fields are `None` for anonymous complaints: an
/// anonymous record never exposes identifying information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintInfo {
    /// The sequential numeric identifier.
    pub id: u64,
    /// The reference code.
    pub reference_code: String,
    /// The complaint category.
    pub category: String,
    /// The complaint title.
    pub title: String,
    /// The detailed description.
    pub description: String,
    /// The incident date (ISO 8601 date string).
    pub incident_date: String,
    /// The approximate incident time, if recorded.
    pub incident_time: Option<String>,
    /// The street address.
    pub address: String,
    /// The neighborhood, if recorded.
    pub neighborhood: Option<String>,
    /// The city or municipality.
    pub city: String,
    /// Whether the complaint is anonymous.
    pub is_anonymous: bool,
    /// The reporter's name, absent for anonymous complaints.
    pub reporter_name: Option<String>,
    /// The reporter's phone, absent for anonymous complaints.
    pub reporter_phone: Option<String>,
    /// The reporter's email, absent for anonymous complaints.
    pub reporter_email: Option<String>,
    /// Names of attached evidence files.
    pub attached_file_names: Vec<String>,
    /// Authorities involved, if recorded.
    pub involved_authorities: Option<String>,
    /// Witnesses, if recorded.
    pub witnesses: Option<String>,
    /// The priority.
    pub priority: String,
    /// The review status.
    pub status: String,
    /// The registration timestamp (ISO 8601).
    pub registered_at: String,
}

/// API response for listing complaints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListComplaintsResponse {
    /// The complaints passing the criteria, newest first.
    pub complaints: Vec<ComplaintInfo>,
    /// How many complaints passed the criteria.
    pub matching_count: usize,
}

/// API response carrying dashboard statistics.
///
/// Statistics cover the complete complaint list, independent of any
/// filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    /// Count of all complaints.
    pub total: usize,
    /// Count of pending complaints.
    pub pending: usize,
    /// Count of resolved complaints.
    pub resolved: usize,
    /// The most common category, or `None` when there are no
    /// complaints.
    pub most_common_category: Option<String>,
}

/// API response listing the fixed option sets the intake form and the
/// review filters are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormOptionsResponse {
    /// All complaint categories.
    pub categories: Vec<String>,
    /// All priorities.
    pub priorities: Vec<String>,
    /// All statuses.
    pub statuses: Vec<String>,
}
