// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

/// The instant a complaint was submitted.
///
/// Captured once at the boundary that receives the submission, so the
/// state transition itself stays deterministic: the year feeds the
/// reference code and the ISO 8601 value becomes the registration
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionTime {
    /// The calendar year of the submission.
    year: u16,
    /// The full submission instant (ISO 8601 timestamp).
    iso8601: String,
}

impl SubmissionTime {
    /// Creates a submission time from its parts.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year of the submission
    /// * `iso8601` - The submission instant as an ISO 8601 timestamp
    #[must_use]
    pub const fn new(year: u16, iso8601: String) -> Self {
        Self { year, iso8601 }
    }

    /// Captures the current UTC instant as a submission time.
    ///
    /// # Errors
    ///
    /// Returns an error if the current instant cannot be formatted as
    /// ISO 8601 or the year falls outside the representable range.
    pub fn now_utc() -> Result<Self, DomainError> {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let iso8601: String =
            now.format(&Iso8601::DEFAULT)
                .map_err(|e| DomainError::TimestampFormat {
                    reason: e.to_string(),
                })?;
        let year: u16 = u16::try_from(now.year()).map_err(|_| DomainError::TimestampFormat {
            reason: format!("year {} out of range", now.year()),
        })?;
        Ok(Self { year, iso8601 })
    }

    /// Returns the calendar year of the submission.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the full submission instant (ISO 8601 timestamp).
    #[must_use]
    pub fn iso8601(&self) -> &str {
        &self.iso8601
    }

    /// Returns the submission date, the `YYYY-MM-DD` prefix of the
    /// timestamp.
    #[must_use]
    pub fn date(&self) -> &str {
        self.iso8601.get(..10).unwrap_or(&self.iso8601)
    }
}
