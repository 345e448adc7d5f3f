// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::state::{SessionState, SubmissionNotice, TransitionResult};
use denuncia_domain::{ComplaintRecord, ReferenceCode};

/// Applies a command to the current state, producing a new state.
///
/// This function is pure and infallible: the input state is never
/// mutated, and no command can fail. Submission payloads are assumed
/// to have passed boundary validation already; a constraint violation
/// reaching this point is a precondition breach of the caller, not a
/// recoverable condition here.
///
/// # Arguments
///
/// * `state` - The current session state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// A [`TransitionResult`] containing the new state and, for
/// submissions, the assigned reference code.
#[must_use]
pub fn apply(state: &SessionState, command: Command) -> TransitionResult {
    match command {
        Command::LogIn => TransitionResult {
            new_state: SessionState::from_parts(
                true,
                state.complaints().to_vec(),
                state.last_notification().cloned(),
                state.sequence(),
            ),
            assigned_reference: None,
        },
        Command::LogOut => TransitionResult {
            // Logging out does not clear the complaint list
            new_state: SessionState::from_parts(
                false,
                state.complaints().to_vec(),
                state.last_notification().cloned(),
                state.sequence(),
            ),
            assigned_reference: None,
        },
        Command::SubmitComplaint {
            input,
            submitted_at,
        } => {
            let sequence: u64 = state.sequence() + 1;
            let reference_code: ReferenceCode =
                ReferenceCode::new(submitted_at.year(), sequence);
            let record: ComplaintRecord = ComplaintRecord::from_input(
                input,
                sequence,
                reference_code.clone(),
                submitted_at.iso8601().to_owned(),
            );

            // Prepend: the list stays ordered newest first
            let mut complaints: Vec<ComplaintRecord> =
                Vec::with_capacity(state.complaints().len() + 1);
            complaints.push(record);
            complaints.extend_from_slice(state.complaints());

            let new_state: SessionState = SessionState::from_parts(
                state.is_authenticated(),
                complaints,
                Some(SubmissionNotice {
                    reference_code: reference_code.clone(),
                }),
                sequence,
            );

            TransitionResult {
                new_state,
                assigned_reference: Some(reference_code),
            }
        }
        Command::DismissNotification => TransitionResult {
            new_state: SessionState::from_parts(
                state.is_authenticated(),
                state.complaints().to_vec(),
                None,
                state.sequence(),
            ),
            assigned_reference: None,
        },
    }
}
