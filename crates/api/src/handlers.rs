// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking and activity operations.
//!
//! Each handler validates input, authorizes the actor, calls the booking
//! core (or the catalog operations on persistence), and shapes the result
//! into the response envelope. `now` is injected so the temporal rule is
//! deterministic under test; the server supplies the wall clock.

use gym_agenda::{
    CancelBooking, CreateBooking, RescheduleBooking, cancel_booking as core_cancel,
    create_booking as core_create, find_booking as core_find, list_bookings as core_list,
    reschedule_booking as core_reschedule,
};
use gym_agenda_domain::{Activity, ActivityKind, Capacity, Role, parse_date, parse_time};
use gym_agenda_persistence::{Persistence, PersistenceError};
use time::{Date, PrimitiveDateTime, Time};
use tracing::error;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    ActivityData, ApiResponse, BookingData, BookingDetailsData, CancelBookingRequest,
    CreateActivityRequest, CreateBookingRequest, DeleteActivityRequest, ListActivitiesFilter,
    RegisterUserRequest, RescheduleBookingRequest, UpdateActivityRequest, UserData,
    outcome_response,
};

fn parse_actor(actor_id: i64, actor_role: &str) -> Result<AuthenticatedActor, ApiError> {
    let role = Role::parse(actor_role).map_err(translate_domain_error)?;
    Ok(AuthenticatedActor::new(actor_id, role))
}

fn parse_schedule(date: &str, time: &str) -> Result<(Date, Time), ApiError> {
    let date = parse_date(date).map_err(translate_domain_error)?;
    let time = parse_time(time).map_err(translate_domain_error)?;
    Ok((date, time))
}

fn storage_error(err: PersistenceError) -> ApiError {
    error!("Persistence failure: {err}");
    ApiError::Internal {
        message: err.to_string(),
    }
}

fn require_user(
    persistence: &mut Persistence,
    user_id: i64,
) -> Result<(), ApiError> {
    match persistence.find_user(user_id).map_err(storage_error)? {
        Some(_) => Ok(()),
        None => Err(ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User {user_id} does not exist"),
        }),
    }
}

/// Creates a booking for the acting client.
///
/// Rejects calendar dates strictly before today at the boundary; the
/// temporal rule inside the core only gates updates to *existing* bookings.
///
/// # Errors
///
/// Returns an error for invalid input, an unauthorized actor, an unknown
/// actor id, or a storage failure. Business outcomes are in the envelope.
pub fn create_booking(
    persistence: &mut Persistence,
    request: &CreateBookingRequest,
    now: PrimitiveDateTime,
) -> Result<ApiResponse<BookingData>, ApiError> {
    let actor = parse_actor(request.actor_id, &request.actor_role)?;
    AuthorizationService::authorize_booking_mutation(&actor, "create_booking")?;

    let (date, time) = parse_schedule(&request.date, &request.time)?;
    if date < now.date() {
        return Err(ApiError::InvalidInput {
            field: String::from("date"),
            message: String::from("Cannot create a booking on a past date"),
        });
    }

    require_user(persistence, actor.user_id)?;

    let outcome = core_create(
        persistence,
        &CreateBooking {
            client_id: actor.user_id,
            activity_id: request.activity_id,
            date,
            time,
        },
    )
    .map_err(translate_core_error)?;

    Ok(outcome_response(&outcome))
}

/// Moves a booking owned by the acting client to a new date/time.
///
/// The target date gets the same boundary check as create: moving a booking
/// into the past would strand it where the temporal rule blocks any further
/// edit or cancel.
///
/// # Errors
///
/// Returns an error for invalid input, an unauthorized actor, or a storage
/// failure.
pub fn reschedule_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    request: &RescheduleBookingRequest,
    now: PrimitiveDateTime,
) -> Result<ApiResponse<BookingData>, ApiError> {
    let actor = parse_actor(request.actor_id, &request.actor_role)?;
    AuthorizationService::authorize_booking_mutation(&actor, "reschedule_booking")?;

    let (date, time) = parse_schedule(&request.date, &request.time)?;
    if date < now.date() {
        return Err(ApiError::InvalidInput {
            field: String::from("date"),
            message: String::from("Cannot reschedule a booking to a past date"),
        });
    }

    let outcome = core_reschedule(
        persistence,
        &RescheduleBooking {
            booking_id,
            requester_client_id: actor.user_id,
            date,
            time,
        },
        now,
    )
    .map_err(translate_core_error)?;

    Ok(outcome_response(&outcome))
}

/// Cancels a booking owned by the acting client.
///
/// # Errors
///
/// Returns an error for invalid input, an unauthorized actor, or a storage
/// failure.
pub fn cancel_booking(
    persistence: &mut Persistence,
    booking_id: i64,
    request: &CancelBookingRequest,
    now: PrimitiveDateTime,
) -> Result<ApiResponse<BookingData>, ApiError> {
    let actor = parse_actor(request.actor_id, &request.actor_role)?;
    AuthorizationService::authorize_booking_mutation(&actor, "cancel_booking")?;

    let outcome = core_cancel(
        persistence,
        &CancelBooking {
            booking_id,
            requester_client_id: actor.user_id,
        },
        now,
    )
    .map_err(translate_core_error)?;

    Ok(outcome_response(&outcome))
}

/// Role-dispatched booking listing.
///
/// # Errors
///
/// Returns an error for an unknown role string or a storage failure.
pub fn list_bookings(
    persistence: &mut Persistence,
    actor_id: i64,
    actor_role: &str,
) -> Result<ApiResponse<Vec<BookingDetailsData>>, ApiError> {
    let actor = parse_actor(actor_id, actor_role)?;

    let listed = core_list(persistence, actor.user_id, actor.role)
        .map_err(translate_core_error)?;
    let data: Vec<BookingDetailsData> = listed.iter().map(BookingDetailsData::from).collect();

    Ok(ApiResponse::ok(data))
}

/// Looks up one booking with joined details.
///
/// # Errors
///
/// Returns an error on storage failure only; a missing booking is the
/// `not_found` envelope.
pub fn get_booking(
    persistence: &mut Persistence,
    booking_id: i64,
) -> Result<ApiResponse<BookingDetailsData>, ApiError> {
    let found = core_find(persistence, booking_id).map_err(translate_core_error)?;

    Ok(found.as_ref().map_or_else(
        || ApiResponse {
            success: false,
            code: String::from("not_found"),
            message: String::from("Booking not found"),
            data: None,
        },
        |details| ApiResponse::ok(BookingDetailsData::from(details)),
    ))
}

fn activity_from_fields(
    name: &str,
    kind: &str,
    description: Option<String>,
    duration_minutes: u32,
    capacity: Option<u32>,
    professional_id: i64,
) -> Result<Activity, ApiError> {
    let kind = ActivityKind::parse(kind).map_err(translate_domain_error)?;
    let capacity = capacity.map_or(Capacity::Unlimited, Capacity::Limited);
    Activity::new(
        name.to_string(),
        kind,
        description,
        duration_minutes,
        capacity,
        professional_id,
    )
    .map_err(translate_domain_error)
}

/// Creates an activity owned by the acting professional.
///
/// # Errors
///
/// Returns an error for invalid fields, an unauthorized actor, an unknown
/// actor id, or a storage failure.
pub fn create_activity(
    persistence: &mut Persistence,
    request: &CreateActivityRequest,
) -> Result<ApiResponse<ActivityData>, ApiError> {
    let actor = parse_actor(request.actor_id, &request.actor_role)?;
    AuthorizationService::authorize_activity_management(&actor, "create_activity")?;

    require_user(persistence, actor.user_id)?;

    let activity = activity_from_fields(
        &request.name,
        &request.kind,
        request.description.clone(),
        request.duration_minutes,
        request.capacity,
        actor.user_id,
    )?;

    let created = persistence
        .create_activity(&activity)
        .map_err(storage_error)?;

    let overview = gym_agenda_persistence::ActivityOverview {
        remaining_slots: created.capacity.remaining(0),
        activity: created,
        active_bookings: 0,
    };

    Ok(ApiResponse {
        success: true,
        code: String::from("created"),
        message: String::from("Activity created"),
        data: Some(ActivityData::from(&overview)),
    })
}

/// Updates an activity's catalog fields.
///
/// Administrators may update any activity; professionals and personal
/// trainers only their own. Ownership never changes on update.
///
/// # Errors
///
/// Returns an error for invalid fields, an unauthorized actor, a missing
/// activity, or a storage failure.
pub fn update_activity(
    persistence: &mut Persistence,
    activity_id: i64,
    request: &UpdateActivityRequest,
) -> Result<ApiResponse<ActivityData>, ApiError> {
    let actor = parse_actor(request.actor_id, &request.actor_role)?;
    AuthorizationService::authorize_activity_management(&actor, "update_activity")?;

    let Some(existing) = persistence.get_activity(activity_id).map_err(storage_error)? else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Activity"),
            message: format!("Activity {activity_id} does not exist"),
        });
    };
    AuthorizationService::authorize_activity_ownership(
        &actor,
        existing.professional_id,
        "update_activity",
    )?;

    let mut activity = activity_from_fields(
        &request.name,
        &request.kind,
        request.description.clone(),
        request.duration_minutes,
        request.capacity,
        existing.professional_id,
    )?;
    activity.activity_id = Some(activity_id);

    let updated = persistence
        .update_activity(&activity)
        .map_err(storage_error)?;

    let active_bookings = persistence
        .count_active_bookings(activity_id)
        .map_err(storage_error)?;
    let overview = gym_agenda_persistence::ActivityOverview {
        remaining_slots: updated.capacity.remaining(active_bookings),
        activity: updated,
        active_bookings,
    };

    Ok(ApiResponse {
        success: true,
        code: String::from("updated"),
        message: String::from("Activity updated"),
        data: Some(ActivityData::from(&overview)),
    })
}

/// Deletes an activity no booking references.
///
/// # Errors
///
/// Returns an error for an unauthorized actor, a missing activity, a
/// referenced activity, or a storage failure.
pub fn delete_activity(
    persistence: &mut Persistence,
    activity_id: i64,
    request: &DeleteActivityRequest,
) -> Result<ApiResponse<ActivityData>, ApiError> {
    let actor = parse_actor(request.actor_id, &request.actor_role)?;
    AuthorizationService::authorize_activity_management(&actor, "delete_activity")?;

    let Some(existing) = persistence.get_activity(activity_id).map_err(storage_error)? else {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Activity"),
            message: format!("Activity {activity_id} does not exist"),
        });
    };
    AuthorizationService::authorize_activity_ownership(
        &actor,
        existing.professional_id,
        "delete_activity",
    )?;

    match persistence.delete_activity(activity_id) {
        Ok(()) => Ok(ApiResponse {
            success: true,
            code: String::from("deleted"),
            message: String::from("Activity deleted"),
            data: None,
        }),
        Err(PersistenceError::ActivityReferenced { activity_id }) => {
            Err(ApiError::RuleViolation {
                rule: String::from("activity_referenced"),
                message: format!("Activity {activity_id} has bookings and cannot be deleted"),
            })
        }
        Err(e) => Err(storage_error(e)),
    }
}

/// Registers a user.
///
/// Registration is open (the upstream identity layer decides who may call
/// it); this handler only validates the fields and the role string.
///
/// # Errors
///
/// Returns an error for invalid fields, a duplicate email, or a storage
/// failure.
pub fn register_user(
    persistence: &mut Persistence,
    request: &RegisterUserRequest,
) -> Result<ApiResponse<UserData>, ApiError> {
    let role = Role::parse(&request.role).map_err(|_| ApiError::InvalidInput {
        field: String::from("role"),
        message: format!("Unknown role: '{}'", request.role),
    })?;
    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Name must not be empty"),
        });
    }
    if !request.email.contains('@') {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: String::from("Email must contain '@'"),
        });
    }

    if persistence
        .find_user_by_email(&request.email)
        .map_err(storage_error)?
        .is_some()
    {
        return Err(ApiError::RuleViolation {
            rule: String::from("unique_email"),
            message: format!("A user with email '{}' already exists", request.email),
        });
    }

    let user_id = persistence
        .create_user(&request.name, &request.email, role)
        .map_err(storage_error)?;

    Ok(ApiResponse {
        success: true,
        code: String::from("created"),
        message: String::from("User registered"),
        data: Some(UserData {
            user_id,
            name: request.name.clone(),
            email: request.email.clone(),
            role: role.as_str().to_string(),
        }),
    })
}

/// Lists the activity catalog, optionally filtered.
///
/// # Errors
///
/// Returns an error on storage failure.
pub fn list_activities(
    persistence: &mut Persistence,
    filter: ListActivitiesFilter,
) -> Result<ApiResponse<Vec<ActivityData>>, ApiError> {
    let overviews = match (filter.professional_id, filter.available_only) {
        (Some(professional_id), _) => persistence
            .list_activities_by_professional(professional_id)
            .map_err(storage_error)?,
        (None, true) => persistence
            .list_available_activities()
            .map_err(storage_error)?,
        (None, false) => persistence.list_activities().map_err(storage_error)?,
    };

    let data: Vec<ActivityData> = overviews.iter().map(ActivityData::from).collect();
    Ok(ApiResponse::ok(data))
}
