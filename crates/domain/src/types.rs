// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::reference_code::ReferenceCode;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a complaint category.
///
/// Categories are fixed domain constants; a complaint always carries
/// exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Corruption by public officials.
    Corruption,
    /// Abuse of authority.
    #[serde(rename = "Abuse of Authority")]
    AbuseOfAuthority,
    /// Negligence in the exercise of public duties.
    Negligence,
    /// Deficient public services.
    #[serde(rename = "Public Services")]
    PublicServices,
    /// Environmental damage.
    Environmental,
    /// Anything that does not fit the other categories.
    Other,
}

impl Category {
    /// All categories, in the order they are offered on the intake form.
    pub const ALL: [Self; 6] = [
        Self::Corruption,
        Self::AbuseOfAuthority,
        Self::Negligence,
        Self::PublicServices,
        Self::Environmental,
        Self::Other,
    ];

    /// Parses a category from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid category.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Corruption" => Ok(Self::Corruption),
            "Abuse of Authority" => Ok(Self::AbuseOfAuthority),
            "Negligence" => Ok(Self::Negligence),
            "Public Services" => Ok(Self::PublicServices),
            "Environmental" => Ok(Self::Environmental),
            "Other" => Ok(Self::Other),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }

    /// Returns the string representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Corruption => "Corruption",
            Self::AbuseOfAuthority => "Abuse of Authority",
            Self::Negligence => "Negligence",
            Self::PublicServices => "Public Services",
            Self::Environmental => "Environmental",
            Self::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the priority assigned to a complaint.
///
/// Priorities are fixed domain constants. New submissions default to
/// `Medium` when the submitter does not choose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
    /// Urgent priority.
    Urgent,
}

impl Priority {
    /// All priorities, in ascending order of urgency.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Parses a priority from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid priority.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Urgent" => Ok(Self::Urgent),
            _ => Err(DomainError::UnknownPriority(s.to_string())),
        }
    }

    /// Returns the string representation of this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the review status of a complaint.
///
/// Every complaint is `Pending` at creation. The other statuses are
/// reached only through administrative review, which happens outside
/// this system; they appear here so that seeded and externally
/// reviewed records can be represented and filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    /// Received and awaiting review.
    #[default]
    Pending,
    /// An administrator is reviewing the complaint.
    #[serde(rename = "Under Review")]
    UnderReview,
    /// The complaint triggered a formal investigation.
    #[serde(rename = "Under Investigation")]
    UnderInvestigation,
    /// The complaint has been resolved.
    Resolved,
}

impl Status {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::UnderReview,
        Self::UnderInvestigation,
        Self::Resolved,
    ];

    /// Parses a status from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Under Review" => Ok(Self::UnderReview),
            "Under Investigation" => Ok(Self::UnderInvestigation),
            "Resolved" => Ok(Self::Resolved),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }

    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::UnderReview => "Under Review",
            Self::UnderInvestigation => "Under Investigation",
            Self::Resolved => "Resolved",
        }
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the identity attached to a complaint.
///
/// An anonymous complaint structurally carries no reporter data, so
/// nothing identifying can leak out of it by accident. Identified
/// complaints carry the contact fields collected by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reporter {
    /// The submitter chose to stay anonymous.
    Anonymous,
    /// The submitter provided contact information.
    Identified {
        /// The reporter's full name.
        name: String,
        /// The reporter's contact phone.
        phone: String,
        /// The reporter's contact email.
        email: String,
    },
}

impl Reporter {
    /// Returns whether this reporter is anonymous.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Returns the reporter's name, if identified.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Identified { name, .. } => Some(name),
        }
    }

    /// Returns the reporter's phone, if identified.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Identified { phone, .. } => Some(phone),
        }
    }

    /// Returns the reporter's email, if identified.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Identified { email, .. } => Some(email),
        }
    }
}

/// The validated payload of a complaint submission.
///
/// This is the typed form of a submission after boundary validation:
/// every required field is present, the reporter is either anonymous
/// or fully identified, and dates are ISO 8601 date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintInput {
    /// The complaint category.
    pub category: Category,
    /// A short title summarizing the complaint.
    pub title: String,
    /// The detailed description of the facts.
    pub description: String,
    /// The date of the incident (ISO 8601 date string).
    pub incident_date: String,
    /// The approximate time of the incident (optional).
    pub incident_time: Option<String>,
    /// The street address where the incident took place.
    pub address: String,
    /// The neighborhood (optional).
    pub neighborhood: Option<String>,
    /// The city or municipality.
    pub city: String,
    /// The reporter identity.
    pub reporter: Reporter,
    /// Names of attached evidence files. Only the names are kept; no
    /// file content is modeled.
    pub attached_file_names: Vec<String>,
    /// Authorities involved in the incident (optional free text).
    pub involved_authorities: Option<String>,
    /// Witnesses of the incident (optional free text).
    pub witnesses: Option<String>,
    /// The priority chosen by the submitter.
    pub priority: Priority,
}

/// Represents one citizen-submitted incident report.
///
/// Records are created only through the session store's submission
/// command, which stamps the identifier, reference code, status, and
/// registration timestamp. Records are never mutated or deleted after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Sequential numeric identifier, unique and immutable.
    pub id: u64,
    /// The human-shareable tracking code, unique and immutable.
    pub reference_code: ReferenceCode,
    /// The complaint category.
    pub category: Category,
    /// A short title summarizing the complaint.
    pub title: String,
    /// The detailed description of the facts.
    pub description: String,
    /// The date of the incident (ISO 8601 date string).
    pub incident_date: String,
    /// The approximate time of the incident (optional).
    pub incident_time: Option<String>,
    /// The street address where the incident took place.
    pub address: String,
    /// The neighborhood (optional).
    pub neighborhood: Option<String>,
    /// The city or municipality.
    pub city: String,
    /// The reporter identity.
    pub reporter: Reporter,
    /// Names of attached evidence files.
    pub attached_file_names: Vec<String>,
    /// Authorities involved in the incident (optional free text).
    pub involved_authorities: Option<String>,
    /// Witnesses of the incident (optional free text).
    pub witnesses: Option<String>,
    /// The priority assigned to the complaint.
    pub priority: Priority,
    /// The review status of the complaint.
    pub status: Status,
    /// When the complaint was registered (ISO 8601 timestamp).
    pub registered_at: String,
}

impl ComplaintRecord {
    /// Builds a record from a validated submission payload.
    ///
    /// The status is always `Pending` for a newly created record.
    ///
    /// # Arguments
    ///
    /// * `input` - The validated submission payload
    /// * `id` - The sequential identifier assigned by the store
    /// * `reference_code` - The tracking code assigned by the store
    /// * `registered_at` - The registration timestamp (ISO 8601)
    #[must_use]
    pub fn from_input(
        input: ComplaintInput,
        id: u64,
        reference_code: ReferenceCode,
        registered_at: String,
    ) -> Self {
        Self {
            id,
            reference_code,
            category: input.category,
            title: input.title,
            description: input.description,
            incident_date: input.incident_date,
            incident_time: input.incident_time,
            address: input.address,
            neighborhood: input.neighborhood,
            city: input.city,
            reporter: input.reporter,
            attached_file_names: input.attached_file_names,
            involved_authorities: input.involved_authorities,
            witnesses: input.witnesses,
            priority: input.priority,
            status: Status::Pending,
            registered_at,
        }
    }
}
