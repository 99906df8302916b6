// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.
//!
//! The conflict and capacity checkers depend on `active_windows_for_client`
//! and `count_active_at_slot`; both filter on `status = 'Active'` so
//! cancelled bookings never participate. Listing queries return bookings of
//! any status, joined with display attributes.

use diesel::prelude::*;
use diesel::SqliteConnection;
use gym_agenda_domain::{BookedWindow, Booking, BookingDetails, BookingStatus};
use time::{Date, Time};
use tracing::debug;

use crate::data_models::{BookingRow, format_date, format_time};
use crate::diesel_schema::{activities, bookings, users};
use crate::error::PersistenceError;

pub fn find_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<Booking>, PersistenceError> {
    debug!("Looking up booking by id: {}", booking_id);

    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(Booking::try_from(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Returns the `(booking_id, time, duration)` of every `Active` booking a
/// client holds on a date, each pre-joined with its activity's duration.
pub fn active_windows_for_client(
    conn: &mut SqliteConnection,
    client_id: i64,
    date: Date,
) -> Result<Vec<BookedWindow>, PersistenceError> {
    let date_text = format_date(date)?;
    debug!(
        "Loading active windows for client {} on {}",
        client_id, date_text
    );

    let rows: Vec<(i64, String, i32)> = bookings::table
        .inner_join(activities::table)
        .filter(bookings::client_id.eq(client_id))
        .filter(bookings::date.eq(&date_text))
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .select((
            bookings::booking_id,
            bookings::time,
            activities::duration_minutes,
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(booking_id, time_text, duration_minutes)| {
            let start = gym_agenda_domain::parse_time(&time_text).map_err(|e| {
                PersistenceError::CorruptRow {
                    table: "bookings".to_string(),
                    detail: e.to_string(),
                }
            })?;
            let duration_minutes = u32::try_from(duration_minutes).map_err(|_| {
                PersistenceError::CorruptRow {
                    table: "activities".to_string(),
                    detail: format!("negative duration {duration_minutes}"),
                }
            })?;
            Ok(BookedWindow {
                booking_id,
                start,
                duration_minutes,
            })
        })
        .collect()
}

/// Counts `Active` bookings at exactly `(activity_id, date, time)`.
pub fn count_active_at_slot(
    conn: &mut SqliteConnection,
    activity_id: i64,
    date: Date,
    time: Time,
) -> Result<u32, PersistenceError> {
    let date_text = format_date(date)?;
    let time_text = format_time(time)?;

    let count: i64 = bookings::table
        .filter(bookings::activity_id.eq(activity_id))
        .filter(bookings::date.eq(&date_text))
        .filter(bookings::time.eq(&time_text))
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .count()
        .get_result(conn)?;

    u32::try_from(count).map_err(|_| PersistenceError::CorruptRow {
        table: "bookings".to_string(),
        detail: format!("slot count {count} out of range"),
    })
}

/// Joins one booking row with its activity and user display attributes.
fn to_details(
    conn: &mut SqliteConnection,
    row: BookingRow,
) -> Result<BookingDetails, PersistenceError> {
    let (activity_name, activity_kind, duration_minutes, professional_id): (
        String,
        String,
        i32,
        i64,
    ) = activities::table
        .filter(activities::activity_id.eq(row.activity_id))
        .select((
            activities::name,
            activities::kind,
            activities::duration_minutes,
            activities::professional_id,
        ))
        .first(conn)?;

    let professional_name: String = users::table
        .filter(users::user_id.eq(professional_id))
        .select(users::name)
        .first(conn)?;

    let client_name: String = users::table
        .filter(users::user_id.eq(row.client_id))
        .select(users::name)
        .first(conn)?;

    let activity_kind = gym_agenda_domain::ActivityKind::parse(&activity_kind).map_err(|e| {
        PersistenceError::CorruptRow {
            table: "activities".to_string(),
            detail: e.to_string(),
        }
    })?;
    let duration_minutes =
        u32::try_from(duration_minutes).map_err(|_| PersistenceError::CorruptRow {
            table: "activities".to_string(),
            detail: format!("negative duration {duration_minutes}"),
        })?;

    Ok(BookingDetails {
        booking: Booking::try_from(row)?,
        activity_name,
        activity_kind,
        duration_minutes,
        professional_name,
        client_name,
    })
}

pub fn find_booking_details(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<BookingDetails>, PersistenceError> {
    let result: Result<BookingRow, diesel::result::Error> = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .select(BookingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(to_details(conn, row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

pub fn list_for_client(
    conn: &mut SqliteConnection,
    client_id: i64,
) -> Result<Vec<BookingDetails>, PersistenceError> {
    debug!("Listing bookings for client: {}", client_id);

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::client_id.eq(client_id))
        .order((bookings::date.asc(), bookings::time.asc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| to_details(conn, row)).collect()
}

pub fn list_for_professional(
    conn: &mut SqliteConnection,
    professional_id: i64,
) -> Result<Vec<BookingDetails>, PersistenceError> {
    debug!("Listing bookings for professional: {}", professional_id);

    let rows: Vec<BookingRow> = bookings::table
        .inner_join(activities::table)
        .filter(activities::professional_id.eq(professional_id))
        .order((bookings::date.asc(), bookings::time.asc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| to_details(conn, row)).collect()
}

pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<BookingDetails>, PersistenceError> {
    debug!("Listing all bookings");

    let rows: Vec<BookingRow> = bookings::table
        .order((bookings::date.asc(), bookings::time.asc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(|row| to_details(conn, row)).collect()
}

/// Checks whether any booking row (any status) references an activity.
pub fn is_activity_referenced(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> Result<bool, PersistenceError> {
    let count: i64 = bookings::table
        .filter(bookings::activity_id.eq(activity_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Counts `Active` bookings across all slots of an activity.
pub fn count_active_for_activity(
    conn: &mut SqliteConnection,
    activity_id: i64,
) -> Result<u32, PersistenceError> {
    let count: i64 = bookings::table
        .filter(bookings::activity_id.eq(activity_id))
        .filter(bookings::status.eq(BookingStatus::Active.as_str()))
        .count()
        .get_result(conn)?;

    u32::try_from(count).map_err(|_| PersistenceError::CorruptRow {
        table: "bookings".to_string(),
        detail: format!("activity booking count {count} out of range"),
    })
}
