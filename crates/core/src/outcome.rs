// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gym_agenda_domain::Booking;
use time::{Date, Time};

/// A request to create a new booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBooking {
    /// The requesting client's user id.
    pub client_id: i64,
    /// The activity to book.
    pub activity_id: i64,
    /// The requested calendar date.
    pub date: Date,
    /// The requested wall-clock time.
    pub time: Time,
}

/// A request to move an existing booking to a new date/time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescheduleBooking {
    /// The booking to move.
    pub booking_id: i64,
    /// The requesting client's user id (must own the booking).
    pub requester_client_id: i64,
    /// The new calendar date.
    pub date: Date,
    /// The new wall-clock time.
    pub time: Time,
}

/// A request to cancel an existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelBooking {
    /// The booking to cancel.
    pub booking_id: i64,
    /// The requesting client's user id (must own the booking).
    pub requester_client_id: i64,
}

/// The discriminated result of a booking lifecycle operation.
///
/// Every expected business condition is a variant here, never an error:
/// callers branch on the variant to choose stable user-facing codes and
/// messages. Only infrastructure failures surface as [`crate::CoreError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The booking was created.
    Created(Booking),
    /// The booking's date/time were replaced.
    Updated(Booking),
    /// The booking was cancelled.
    Cancelled,
    /// The client already holds an overlapping active booking.
    Conflict,
    /// The activity slot is at capacity (or the activity does not exist —
    /// the vacancy check fails closed).
    NoVacancy,
    /// No booking exists with the given id.
    NotFound,
    /// The requester does not own the booking.
    Forbidden,
    /// The booking's stored date/time have already elapsed, making it
    /// immutable.
    PastSchedule,
    /// The booking was already cancelled; cancellation is not repeatable.
    AlreadyCancelled,
}
