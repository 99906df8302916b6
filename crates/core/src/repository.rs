// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository traits the booking core depends on.
//!
//! The core is storage-agnostic: it sees the activity catalog and the
//! booking store only through these traits. The persistence crate provides
//! the Diesel/SQLite implementation; tests provide in-memory fakes.
//!
//! Every method takes `&mut self`. A lifecycle operation therefore holds
//! exclusive access to the store for its entire check-then-write sequence,
//! which is the in-process half of the concurrency strategy (the other half
//! is the store running its mutations inside a database transaction).

use crate::error::CoreError;
use gym_agenda_domain::{Activity, BookedWindow, Booking, BookingDetails};
use time::{Date, Time};

/// Read-only access to activity definitions.
///
/// The core consults the catalog for `(duration, capacity)` lookups only
/// and never mutates it.
pub trait ActivityCatalog {
    /// Looks up an activity by id. `Ok(None)` means the activity does not
    /// exist (callers fail closed on it).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn find_activity(&mut self, activity_id: i64) -> Result<Option<Activity>, CoreError>;
}

/// A booking intent that passed all checks and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    /// The booking client's user id.
    pub client_id: i64,
    /// The booked activity's id.
    pub activity_id: i64,
    /// The scheduled calendar date.
    pub date: Date,
    /// The scheduled wall-clock time.
    pub time: Time,
}

/// Durable storage for bookings.
///
/// Query methods are scoped to `Active` bookings where noted; cancelled
/// bookings never participate in conflict or capacity arithmetic.
pub trait BookingStore {
    /// Looks up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn find_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, CoreError>;

    /// Returns the intervals of all `Active` bookings of `client_id` on
    /// `date`, each pre-joined with its own activity's duration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn active_windows_for_client(
        &mut self,
        client_id: i64,
        date: Date,
    ) -> Result<Vec<BookedWindow>, CoreError>;

    /// Counts `Active` bookings at exactly `(activity_id, date, time)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn count_active_at_slot(
        &mut self,
        activity_id: i64,
        date: Date,
        time: Time,
    ) -> Result<u32, CoreError>;

    /// Inserts a new `Active` booking and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking, CoreError>;

    /// Replaces a booking's date and time in place, returning the updated
    /// record. The status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the store fails.
    fn reschedule_booking(
        &mut self,
        booking_id: i64,
        date: Date,
        time: Time,
    ) -> Result<Booking, CoreError>;

    /// Flips a booking's status to `Cancelled` (soft delete; the row is
    /// never physically removed).
    ///
    /// # Errors
    ///
    /// Returns an error if the booking does not exist or the store fails.
    fn mark_cancelled(&mut self, booking_id: i64) -> Result<(), CoreError>;

    /// Looks up a booking by id with joined display details.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn find_booking_details(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<BookingDetails>, CoreError>;

    /// Lists all bookings (any status) belonging to a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn list_for_client(&mut self, client_id: i64) -> Result<Vec<BookingDetails>, CoreError>;

    /// Lists all bookings (any status) of activities owned by a professional.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn list_for_professional(
        &mut self,
        professional_id: i64,
    ) -> Result<Vec<BookingDetails>, CoreError>;

    /// Lists every booking in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn list_all(&mut self) -> Result<Vec<BookingDetails>, CoreError>;
}
