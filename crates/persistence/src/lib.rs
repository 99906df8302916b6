// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite persistence layer for the gym agenda.
//!
//! This crate provides the durable store behind the booking core: users,
//! activities, and bookings live in a `SQLite` database managed through
//! Diesel with embedded migrations.
//!
//! ## Concurrency
//!
//! The booking core performs check-then-write sequences (conflict check,
//! capacity check, insert). Two guarantees keep those sequences atomic:
//!
//! - The core's repository traits take `&mut self`, so an in-process caller
//!   holds exclusive access to the adapter for a whole operation.
//! - Every mutation here runs inside `immediate_transaction`, so a second
//!   process sharing the database file blocks on SQLite's writer lock
//!   instead of interleaving with a half-finished sequence.
//!
//! ## Testing
//!
//! `new_in_memory()` hands out a uniquely named shared in-memory database
//! per call, so tests are isolated and never touch the filesystem.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use diesel::connection::Connection;
use gym_agenda::{ActivityCatalog, BookingStore, CoreError, NewBooking};
use gym_agenda_domain::{
    Activity, BookedWindow, Booking, BookingDetails, Role,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Date, Time};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{ActivityOverview, UserRecord};
pub use error::PersistenceError;

/// Sequential ids for in-memory database names, so concurrent tests never
/// share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

fn to_storage(err: PersistenceError) -> CoreError {
    CoreError::Storage(err.to_string())
}

/// Persistence adapter over a single `SQLite` connection.
///
/// Implements the booking core's [`ActivityCatalog`] and [`BookingStore`]
/// traits and additionally exposes the user and activity catalog operations
/// the HTTP layer needs.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call gets its own uniquely named shared-cache database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file-based databases
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including a duplicate email).
    pub fn create_user(
        &mut self,
        name: &str,
        email: &str,
        role: Role,
    ) -> Result<i64, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::users::create_user(conn, name, email, role))
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_user(&mut self, user_id: i64) -> Result<Option<UserRecord>, PersistenceError> {
        queries::users::find_user(&mut self.conn, user_id)
    }

    /// Looks up a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_user_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<UserRecord>, PersistenceError> {
        queries::users::find_user_by_email(&mut self.conn, email)
    }

    // ========================================================================
    // Activity catalog
    // ========================================================================

    /// Persists a new activity and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_activity(&mut self, activity: &Activity) -> Result<Activity, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::activities::create_activity(conn, activity))
    }

    /// Updates an already-persisted activity in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity has no id, does not exist, or the
    /// update fails.
    pub fn update_activity(&mut self, activity: &Activity) -> Result<Activity, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::activities::update_activity(conn, activity))
    }

    /// Deletes an activity no booking references.
    ///
    /// # Errors
    ///
    /// Returns `ActivityReferenced` if any booking (active or cancelled)
    /// points at the activity, `NotFound` if it does not exist.
    pub fn delete_activity(&mut self, activity_id: i64) -> Result<(), PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::activities::delete_activity(conn, activity_id))
    }

    /// Lists every activity with its live booking load.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_activities(&mut self) -> Result<Vec<ActivityOverview>, PersistenceError> {
        queries::activities::list_activities(&mut self.conn)
    }

    /// Lists the activities owned by one professional.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_activities_by_professional(
        &mut self,
        professional_id: i64,
    ) -> Result<Vec<ActivityOverview>, PersistenceError> {
        queries::activities::list_activities_by_professional(&mut self.conn, professional_id)
    }

    /// Lists activities that still admit at least one booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_available_activities(
        &mut self,
    ) -> Result<Vec<ActivityOverview>, PersistenceError> {
        queries::activities::list_available_activities(&mut self.conn)
    }

    /// Looks up an activity by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_activity(
        &mut self,
        activity_id: i64,
    ) -> Result<Option<Activity>, PersistenceError> {
        queries::activities::find_activity(&mut self.conn, activity_id)
    }

    /// Counts `Active` bookings across all slots of an activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active_bookings(&mut self, activity_id: i64) -> Result<u32, PersistenceError> {
        queries::bookings::count_active_for_activity(&mut self.conn, activity_id)
    }
}

impl ActivityCatalog for Persistence {
    fn find_activity(&mut self, activity_id: i64) -> Result<Option<Activity>, CoreError> {
        queries::activities::find_activity(&mut self.conn, activity_id).map_err(to_storage)
    }
}

impl BookingStore for Persistence {
    fn find_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, CoreError> {
        queries::bookings::find_booking(&mut self.conn, booking_id).map_err(to_storage)
    }

    fn active_windows_for_client(
        &mut self,
        client_id: i64,
        date: Date,
    ) -> Result<Vec<BookedWindow>, CoreError> {
        queries::bookings::active_windows_for_client(&mut self.conn, client_id, date)
            .map_err(to_storage)
    }

    fn count_active_at_slot(
        &mut self,
        activity_id: i64,
        date: Date,
        time: Time,
    ) -> Result<u32, CoreError> {
        queries::bookings::count_active_at_slot(&mut self.conn, activity_id, date, time)
            .map_err(to_storage)
    }

    fn insert_booking(&mut self, booking: &NewBooking) -> Result<Booking, CoreError> {
        self.conn
            .immediate_transaction(|conn| mutations::bookings::insert_booking(conn, booking))
            .map_err(to_storage)
    }

    fn reschedule_booking(
        &mut self,
        booking_id: i64,
        date: Date,
        time: Time,
    ) -> Result<Booking, CoreError> {
        self.conn
            .immediate_transaction(|conn| {
                mutations::bookings::reschedule_booking(conn, booking_id, date, time)
            })
            .map_err(to_storage)
    }

    fn mark_cancelled(&mut self, booking_id: i64) -> Result<(), CoreError> {
        self.conn
            .immediate_transaction(|conn| mutations::bookings::mark_cancelled(conn, booking_id))
            .map_err(to_storage)
    }

    fn find_booking_details(
        &mut self,
        booking_id: i64,
    ) -> Result<Option<BookingDetails>, CoreError> {
        queries::bookings::find_booking_details(&mut self.conn, booking_id).map_err(to_storage)
    }

    fn list_for_client(&mut self, client_id: i64) -> Result<Vec<BookingDetails>, CoreError> {
        queries::bookings::list_for_client(&mut self.conn, client_id).map_err(to_storage)
    }

    fn list_for_professional(
        &mut self,
        professional_id: i64,
    ) -> Result<Vec<BookingDetails>, CoreError> {
        queries::bookings::list_for_professional(&mut self.conn, professional_id)
            .map_err(to_storage)
    }

    fn list_all(&mut self) -> Result<Vec<BookingDetails>, CoreError> {
        queries::bookings::list_all(&mut self.conn).map_err(to_storage)
    }
}
