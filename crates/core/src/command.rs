// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use denuncia_domain::{ComplaintInput, SubmissionTime};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes. Credential
/// verification and input validation happen at the boundary that
/// builds the command; by the time a command reaches the `apply`
/// transition function it is assumed legitimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Mark the administrative session as authenticated.
    LogIn,
    /// Mark the administrative session as no longer authenticated.
    /// The complaint list is retained.
    LogOut,
    /// Register a new complaint.
    SubmitComplaint {
        /// The validated submission payload.
        input: ComplaintInput,
        /// The instant the submission was received.
        submitted_at: SubmissionTime,
    },
    /// Clear the pending submission notice.
    DismissNotification,
}
