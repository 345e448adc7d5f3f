// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use denuncia_domain::{ComplaintRecord, ReferenceCode};

/// The "submission succeeded" signal raised after a complaint is
/// registered.
///
/// The signal carries the generated reference code so the submitter
/// can be shown the value to keep for follow-up. It stays set until
/// explicitly dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionNotice {
    /// The reference code assigned to the submitted complaint.
    pub reference_code: ReferenceCode,
}

/// The complete session state.
///
/// This is the single authoritative holder of the authentication flag,
/// the complaint list, and the submission notice for one session. The
/// complaint list only grows and is ordered newest first. All mutation
/// goes through the `apply` transition function; the fields are not
/// directly writable from outside the crate.
///
/// The sequence counter is stored explicitly rather than derived from
/// the list length, so reference codes can never collide even if a
/// removal operation is ever introduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the administrative session is authenticated.
    authenticated: bool,
    /// All registered complaints, newest first.
    complaints: Vec<ComplaintRecord>,
    /// The pending submission notice, if any.
    last_notification: Option<SubmissionNotice>,
    /// Monotonic counter of submissions; the next complaint receives
    /// `sequence + 1` as its identifier and sequence number.
    sequence: u64,
}

impl SessionState {
    /// Creates a new empty, unauthenticated session state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            authenticated: false,
            complaints: Vec::new(),
            last_notification: None,
            sequence: 0,
        }
    }

    /// Creates a session state pre-populated with existing complaints.
    ///
    /// The sequence counter is initialized to the number of records,
    /// so the next submission continues the numbering. The records
    /// must already be ordered newest first with unique identifiers
    /// and reference codes.
    ///
    /// # Arguments
    ///
    /// * `complaints` - The initial complaint list, newest first
    #[must_use]
    pub fn with_complaints(complaints: Vec<ComplaintRecord>) -> Self {
        let sequence: u64 = complaints.len() as u64;
        Self {
            authenticated: false,
            complaints,
            last_notification: None,
            sequence,
        }
    }

    /// Assembles a session state from its parts.
    ///
    /// Only state transitions construct states this way; the invariant
    /// maintenance lives in the `apply` transition function.
    pub(crate) const fn from_parts(
        authenticated: bool,
        complaints: Vec<ComplaintRecord>,
        last_notification: Option<SubmissionNotice>,
        sequence: u64,
    ) -> Self {
        Self {
            authenticated,
            complaints,
            last_notification,
            sequence,
        }
    }

    /// Returns whether the administrative session is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Returns all registered complaints, newest first.
    #[must_use]
    pub fn complaints(&self) -> &[ComplaintRecord] {
        &self.complaints
    }

    /// Returns the pending submission notice, if any.
    #[must_use]
    pub const fn last_notification(&self) -> Option<&SubmissionNotice> {
        self.last_notification.as_ref()
    }

    /// Returns the current value of the submission counter.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of a state transition.
///
/// Transitions are atomic and pure: the input state is untouched and
/// the result carries the complete new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SessionState,
    /// The reference code assigned by this transition, if it
    /// registered a complaint.
    pub assigned_reference: Option<ReferenceCode>,
}
