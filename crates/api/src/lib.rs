// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use auth::{AuthenticationService, AuthorizationService};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    ApiResult, dismiss_notification, get_notification, get_statistics, list_complaints,
    list_form_options, login, logout, submit_complaint,
};
pub use request_response::{
    ComplaintInfo, DismissNotificationResponse, FormOptionsResponse, ListComplaintsRequest,
    ListComplaintsResponse, LoginRequest, LoginResponse, LogoutResponse, NotificationResponse,
    StatisticsResponse, SubmitComplaintRequest, SubmitComplaintResponse,
};
pub use validation::{FieldError, validate_submission};
