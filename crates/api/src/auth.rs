// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization services.

use crate::error::AuthError;
use denuncia::SessionState;

/// Authentication service for the administrative session.
pub struct AuthenticationService;

impl AuthenticationService {
    /// The demo operator username.
    const DEMO_USERNAME: &'static str = "admin";
    /// The demo operator password.
    const DEMO_PASSWORD: &'static str = "admin123";

    /// Verifies submitted credentials against the fixed demo pair.
    ///
    /// This is a literal comparison against one hardcoded
    /// username/password pair. It does NOT implement real credential
    /// verification and is not a security boundary; any
    /// production-oriented deployment must replace it with a real
    /// credential or identity service.
    ///
    /// # Arguments
    ///
    /// * `username` - The submitted username
    /// * `password` - The submitted password
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials do not match the demo pair.
    pub fn verify_credentials(username: &str, password: &str) -> Result<(), AuthError> {
        if username == Self::DEMO_USERNAME && password == Self::DEMO_PASSWORD {
            Ok(())
        } else {
            Err(AuthError::AuthenticationFailed {
                reason: String::from("Incorrect username or password"),
            })
        }
    }
}

/// Authorization service guarding the review surface.
///
/// The complaint list and statistics are restricted to authenticated
/// sessions; submission and the notification flow are public.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the session is authenticated before a review
    /// action.
    ///
    /// # Arguments
    ///
    /// * `state` - The current session state
    /// * `action` - The action being attempted, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not authenticated.
    pub fn authorize_review(state: &SessionState, action: &str) -> Result<(), AuthError> {
        if state.is_authenticated() {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated {
                action: action.to_string(),
            })
        }
    }
}
