// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking lifecycle service.
//!
//! Orchestrates creation, rescheduling, and cancellation over the repository
//! traits, combining the conflict checker, the capacity checker, and the
//! temporal-legality rule. Per booking the state machine is:
//!
//! ```text
//! Active --cancel--> Cancelled   (terminal)
//! Active --reschedule--> Active  (date/time replaced)
//! ```
//!
//! No transition is possible once a booking is cancelled or has occurred.
//!
//! Each operation takes `&mut S`, so the caller's exclusive borrow of the
//! store spans the whole check-then-write sequence. The HTTP layer extends
//! this guarantee across tasks by holding the store behind a mutex for the
//! duration of a request, and the store itself runs each mutation in a
//! database transaction.

use crate::capacity::has_vacancy;
use crate::conflict::has_conflict;
use crate::error::CoreError;
use crate::outcome::{BookingOutcome, CancelBooking, CreateBooking, RescheduleBooking};
use crate::repository::{ActivityCatalog, BookingStore, NewBooking};
use gym_agenda_domain::{BookingDetails, BookingStatus, Role, TimeWindow, has_occurred};
use time::PrimitiveDateTime;

/// Creates a new booking after running the conflict and capacity checks.
///
/// The conflict check runs first: a client's own double-booking is reported
/// before a capacity failure, which is the precedence user-facing messages
/// follow. On success the booking is inserted as `Active` and echoed back.
///
/// # Errors
///
/// Returns an error only on storage failure; every business condition is a
/// [`BookingOutcome`] variant.
pub fn create_booking<S>(store: &mut S, request: &CreateBooking) -> Result<BookingOutcome, CoreError>
where
    S: BookingStore + ActivityCatalog,
{
    // The candidate window needs the target activity's duration; an unknown
    // activity fails closed, same as the vacancy check.
    let Some(activity) = store.find_activity(request.activity_id)? else {
        return Ok(BookingOutcome::NoVacancy);
    };

    let candidate: TimeWindow = TimeWindow::new(request.time, activity.duration_minutes);
    if has_conflict(store, request.client_id, request.date, candidate, None)? {
        return Ok(BookingOutcome::Conflict);
    }

    if !has_vacancy(store, request.activity_id, request.date, request.time)? {
        return Ok(BookingOutcome::NoVacancy);
    }

    let booking = store.insert_booking(&NewBooking {
        client_id: request.client_id,
        activity_id: request.activity_id,
        date: request.date,
        time: request.time,
    })?;

    Ok(BookingOutcome::Created(booking))
}

/// Moves a still-future booking to a new date/time.
///
/// The temporal rule is evaluated against the booking's *stored* date/time:
/// edits to history are rejected even when the proposed slot is in the
/// future. The conflict check excludes the booking's own id, so a no-op
/// reschedule to the current slot succeeds.
///
/// # Errors
///
/// Returns an error only on storage failure.
pub fn reschedule_booking<S>(
    store: &mut S,
    request: &RescheduleBooking,
    now: PrimitiveDateTime,
) -> Result<BookingOutcome, CoreError>
where
    S: BookingStore + ActivityCatalog,
{
    let Some(booking) = store.find_booking(request.booking_id)? else {
        return Ok(BookingOutcome::NotFound);
    };

    if booking.client_id != request.requester_client_id {
        return Ok(BookingOutcome::Forbidden);
    }

    if has_occurred(booking.date, booking.time, now) {
        return Ok(BookingOutcome::PastSchedule);
    }

    let Some(activity) = store.find_activity(booking.activity_id)? else {
        return Ok(BookingOutcome::NoVacancy);
    };

    let candidate: TimeWindow = TimeWindow::new(request.time, activity.duration_minutes);
    if has_conflict(
        store,
        booking.client_id,
        request.date,
        candidate,
        Some(booking.booking_id),
    )? {
        return Ok(BookingOutcome::Conflict);
    }

    if !has_vacancy(store, booking.activity_id, request.date, request.time)? {
        return Ok(BookingOutcome::NoVacancy);
    }

    let updated = store.reschedule_booking(booking.booking_id, request.date, request.time)?;
    Ok(BookingOutcome::Updated(updated))
}

/// Cancels a still-future booking (soft delete).
///
/// Cancelling an already-cancelled booking reports `AlreadyCancelled` and
/// never mutates state further; the check precedes the temporal rule, so a
/// cancelled past booking also reports `AlreadyCancelled`.
///
/// # Errors
///
/// Returns an error only on storage failure.
pub fn cancel_booking<S: BookingStore>(
    store: &mut S,
    request: &CancelBooking,
    now: PrimitiveDateTime,
) -> Result<BookingOutcome, CoreError> {
    let Some(booking) = store.find_booking(request.booking_id)? else {
        return Ok(BookingOutcome::NotFound);
    };

    if booking.client_id != request.requester_client_id {
        return Ok(BookingOutcome::Forbidden);
    }

    if booking.status == BookingStatus::Cancelled {
        return Ok(BookingOutcome::AlreadyCancelled);
    }

    if has_occurred(booking.date, booking.time, now) {
        return Ok(BookingOutcome::PastSchedule);
    }

    store.mark_cancelled(booking.booking_id)?;
    Ok(BookingOutcome::Cancelled)
}

/// Role-dispatched, read-only booking listing.
///
/// Clients see their own bookings; professionals and personal trainers see
/// bookings of activities they own; administrators see everything. An empty
/// result is success, not an error.
///
/// # Errors
///
/// Returns an error if the booking store fails.
pub fn list_bookings<S: BookingStore>(
    store: &mut S,
    requester_id: i64,
    role: Role,
) -> Result<Vec<BookingDetails>, CoreError> {
    match role {
        Role::Client => store.list_for_client(requester_id),
        Role::Professional | Role::PersonalTrainer => store.list_for_professional(requester_id),
        Role::Administrator => store.list_all(),
    }
}

/// Looks up a single booking with joined display details.
///
/// # Errors
///
/// Returns an error if the booking store fails.
pub fn find_booking<S: BookingStore>(
    store: &mut S,
    booking_id: i64,
) -> Result<Option<BookingDetails>, CoreError> {
    store.find_booking_details(booking_id)
}
