// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use denuncia::{Command, SessionState, TransitionResult, apply};
use denuncia_domain::{
    Category, ComplaintInput, ComplaintRecord, ComplaintStatistics, FilterCriteria, Priority,
    ReferenceCode, Reporter, Status, SubmissionTime, compute_statistics, filter_complaints,
    validate_complaint_input,
};

use crate::auth::{AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    ComplaintInfo, DismissNotificationResponse, FormOptionsResponse, ListComplaintsRequest,
    ListComplaintsResponse, LoginRequest, LoginResponse, LogoutResponse, NotificationResponse,
    StatisticsResponse, SubmitComplaintRequest, SubmitComplaintResponse,
};
use crate::validation::{FieldError, validate_submission};

/// The result of an API operation that changes session state.
///
/// The caller owns the session state; a successful operation hands
/// back the complete new state alongside the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The new state after the operation.
    pub new_state: SessionState,
}

/// Opens the administrative session.
///
/// Credentials are compared against the fixed demo pair before the
/// login transition is applied; the complaint list is untouched.
///
/// # Arguments
///
/// * `state` - The current session state
/// * `request` - The login request
///
/// # Errors
///
/// Returns an error if the credentials do not match the demo pair.
pub fn login(
    state: &SessionState,
    request: &LoginRequest,
) -> Result<ApiResult<LoginResponse>, ApiError> {
    if let Err(err) =
        AuthenticationService::verify_credentials(&request.username, &request.password)
    {
        tracing::warn!("Rejected login attempt for '{}'", request.username);
        return Err(err.into());
    }

    let transition: TransitionResult = apply(state, Command::LogIn);

    Ok(ApiResult {
        response: LoginResponse {
            message: String::from("Session opened"),
        },
        new_state: transition.new_state,
    })
}

/// Closes the administrative session.
///
/// The complaint list and any pending submission notice are retained.
///
/// # Arguments
///
/// * `state` - The current session state
#[must_use]
pub fn logout(state: &SessionState) -> ApiResult<LogoutResponse> {
    let transition: TransitionResult = apply(state, Command::LogOut);

    ApiResult {
        response: LogoutResponse {
            message: String::from("Session closed"),
        },
        new_state: transition.new_state,
    }
}

/// Submits a new complaint.
///
/// This function:
/// - Stamps the submission time
/// - Runs form-level validation, collecting every field error
/// - Translates the request into a typed submission payload
/// - Applies the submission transition
/// - Returns the assigned reference code
///
/// # Arguments
///
/// * `state` - The current session state
/// * `request` - The submission request
///
/// # Errors
///
/// Returns an error if:
/// - Any required field is missing or the email is malformed
/// - The incident date lies in the future
/// - The category or priority value is not in its fixed set
pub fn submit_complaint(
    state: &SessionState,
    request: SubmitComplaintRequest,
) -> Result<ApiResult<SubmitComplaintResponse>, ApiError> {
    let submitted_at: SubmissionTime = SubmissionTime::now_utc().map_err(translate_domain_error)?;

    let errors: Vec<FieldError> = validate_submission(&request, submitted_at.date());
    if !errors.is_empty() {
        tracing::warn!("Rejected submission with {} field error(s)", errors.len());
        return Err(ApiError::ValidationFailed { errors });
    }

    // Translate the request into domain types
    let category: Category = Category::parse(&request.category).map_err(translate_domain_error)?;
    let priority: Priority = if request.priority.is_empty() {
        Priority::default()
    } else {
        Priority::parse(&request.priority).map_err(translate_domain_error)?
    };
    let reporter: Reporter = if request.is_anonymous {
        // Reporter fields on an anonymous submission carry no trusted
        // content and are dropped
        Reporter::Anonymous
    } else {
        Reporter::Identified {
            name: request.reporter_name,
            phone: request.reporter_phone,
            email: request.reporter_email,
        }
    };

    let input: ComplaintInput = ComplaintInput {
        category,
        title: request.title,
        description: request.description,
        incident_date: request.incident_date,
        incident_time: request.incident_time,
        address: request.address,
        neighborhood: request.neighborhood,
        city: request.city,
        reporter,
        attached_file_names: request.attached_file_names,
        involved_authorities: request.involved_authorities,
        witnesses: request.witnesses,
        priority,
    };
    validate_complaint_input(&input).map_err(translate_domain_error)?;

    let TransitionResult {
        new_state,
        assigned_reference,
    } = apply(
        state,
        Command::SubmitComplaint {
            input,
            submitted_at,
        },
    );

    let reference_code: ReferenceCode = assigned_reference.ok_or_else(|| ApiError::Internal {
        message: String::from("Submission produced no reference code"),
    })?;
    tracing::info!("Registered complaint {reference_code}");

    Ok(ApiResult {
        response: SubmitComplaintResponse {
            reference_code: reference_code.value().to_string(),
            message: format!(
                "Your complaint was registered with reference code {reference_code}"
            ),
        },
        new_state,
    })
}

/// Dismisses the pending submission notice.
///
/// # Arguments
///
/// * `state` - The current session state
#[must_use]
pub fn dismiss_notification(state: &SessionState) -> ApiResult<DismissNotificationResponse> {
    let transition: TransitionResult = apply(state, Command::DismissNotification);

    ApiResult {
        response: DismissNotificationResponse {
            message: String::from("Notification dismissed"),
        },
        new_state: transition.new_state,
    }
}

/// Reads the pending submission notice.
///
/// This is a read-only operation and requires no authentication: the
/// notice belongs to the submitter.
///
/// # Arguments
///
/// * `state` - The current session state
#[must_use]
pub fn get_notification(state: &SessionState) -> NotificationResponse {
    NotificationResponse {
        reference_code: state
            .last_notification()
            .map(|notice| notice.reference_code.value().to_string()),
    }
}

/// Lists complaints through the review surface.
///
/// The criteria are applied conjunctively and the result preserves the
/// newest-first order of the underlying list. Requires an
/// authenticated session.
///
/// # Arguments
///
/// * `state` - The current session state
/// * `request` - The list request carrying the filter criteria
///
/// # Errors
///
/// Returns an error if:
/// - The session is not authenticated
/// - A category, priority, or status criterion is not in its fixed set
pub fn list_complaints(
    state: &SessionState,
    request: &ListComplaintsRequest,
) -> Result<ListComplaintsResponse, ApiError> {
    AuthorizationService::authorize_review(state, "list_complaints")?;

    let criteria: FilterCriteria = build_criteria(request)?;
    let filtered: Vec<&ComplaintRecord> = filter_complaints(state.complaints(), &criteria);

    let complaints: Vec<ComplaintInfo> = filtered.into_iter().map(complaint_info).collect();
    let matching_count: usize = complaints.len();

    Ok(ListComplaintsResponse {
        complaints,
        matching_count,
    })
}

/// Reads dashboard statistics over the complete complaint list.
///
/// Statistics are independent of any filter criteria. Requires an
/// authenticated session.
///
/// # Arguments
///
/// * `state` - The current session state
///
/// # Errors
///
/// Returns an error if the session is not authenticated.
pub fn get_statistics(state: &SessionState) -> Result<StatisticsResponse, ApiError> {
    AuthorizationService::authorize_review(state, "get_statistics")?;

    let statistics: ComplaintStatistics = compute_statistics(state.complaints());

    Ok(StatisticsResponse {
        total: statistics.total,
        pending: statistics.pending,
        resolved: statistics.resolved,
        most_common_category: statistics
            .most_common_category
            .map(|category| category.as_str().to_string()),
    })
}

/// Lists the fixed option sets the intake form and the review filters
/// are built from.
///
/// This operation never fails and requires no authentication.
#[must_use]
pub fn list_form_options() -> FormOptionsResponse {
    FormOptionsResponse {
        categories: Category::ALL
            .iter()
            .map(|category| category.as_str().to_string())
            .collect(),
        priorities: Priority::ALL
            .iter()
            .map(|priority| priority.as_str().to_string())
            .collect(),
        statuses: Status::ALL
            .iter()
            .map(|status| status.as_str().to_string())
            .collect(),
    }
}

/// Builds typed filter criteria from a list request.
///
/// Absent and empty criterion values place no restriction.
fn build_criteria(request: &ListComplaintsRequest) -> Result<FilterCriteria, ApiError> {
    let category: Option<Category> = match &request.category {
        Some(value) if !value.is_empty() => {
            Some(Category::parse(value).map_err(translate_domain_error)?)
        }
        _ => None,
    };
    let priority: Option<Priority> = match &request.priority {
        Some(value) if !value.is_empty() => {
            Some(Priority::parse(value).map_err(translate_domain_error)?)
        }
        _ => None,
    };
    let status: Option<Status> = match &request.status {
        Some(value) if !value.is_empty() => {
            Some(Status::parse(value).map_err(translate_domain_error)?)
        }
        _ => None,
    };

    Ok(FilterCriteria {
        category,
        priority,
        status,
        city: non_empty(&request.city),
        date_from: non_empty(&request.date_from),
        date_to: non_empty(&request.date_to),
        search: non_empty(&request.search),
        anonymous_only: request.anonymous_only,
    })
}

/// Normalizes an optional criterion string, treating empty as unset.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Converts a complaint record into its listing representation.
///
/// Reporter contact fields are populated only for identified
/// complaints.
fn complaint_info(record: &ComplaintRecord) -> ComplaintInfo {
    ComplaintInfo {
        id: record.id,
        reference_code: record.reference_code.value().to_string(),
        category: record.category.as_str().to_string(),
        title: record.title.clone(),
        description: record.description.clone(),
        incident_date: record.incident_date.clone(),
        incident_time: record.incident_time.clone(),
        address: record.address.clone(),
        neighborhood: record.neighborhood.clone(),
        city: record.city.clone(),
        is_anonymous: record.reporter.is_anonymous(),
        reporter_name: record.reporter.name().map(ToString::to_string),
        reporter_phone: record.reporter.phone().map(ToString::to_string),
        reporter_email: record.reporter.email().map(ToString::to_string),
        attached_file_names: record.attached_file_names.clone(),
        involved_authorities: record.involved_authorities.clone(),
        witnesses: record.witnesses.clone(),
        priority: record.priority.as_str().to_string(),
        status: record.status.as_str().to_string(),
        registered_at: record.registered_at.clone(),
    }
}
