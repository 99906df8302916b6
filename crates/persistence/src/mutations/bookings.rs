// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use gym_agenda::NewBooking;
use gym_agenda_domain::{Booking, BookingStatus};
use time::{Date, Time};
use tracing::info;

use crate::data_models::{format_date, format_time};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;
use crate::queries::bookings::find_booking;
use crate::sqlite::get_last_insert_rowid;

pub fn insert_booking(
    conn: &mut SqliteConnection,
    booking: &NewBooking,
) -> Result<Booking, PersistenceError> {
    let date_text = format_date(booking.date)?;
    let time_text = format_time(booking.time)?;

    info!(
        "Creating booking for client {} on activity {} at {} {}",
        booking.client_id, booking.activity_id, date_text, time_text
    );

    diesel::insert_into(bookings::table)
        .values((
            bookings::client_id.eq(booking.client_id),
            bookings::activity_id.eq(booking.activity_id),
            bookings::date.eq(&date_text),
            bookings::time.eq(&time_text),
            bookings::status.eq(BookingStatus::Active.as_str()),
        ))
        .execute(conn)?;

    let booking_id: i64 = get_last_insert_rowid(conn)?;

    info!(booking_id, "Booking created");

    find_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("booking {booking_id} after insert")))
}

pub fn reschedule_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    date: Date,
    time: Time,
) -> Result<Booking, PersistenceError> {
    let date_text = format_date(date)?;
    let time_text = format_time(time)?;

    info!(
        "Rescheduling booking {} to {} {}",
        booking_id, date_text, time_text
    );

    let updated = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id))
        .set((bookings::date.eq(&date_text), bookings::time.eq(&time_text)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("booking {booking_id}")));
    }

    find_booking(conn, booking_id)?
        .ok_or_else(|| PersistenceError::NotFound(format!("booking {booking_id} after update")))
}

pub fn mark_cancelled(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<(), PersistenceError> {
    info!("Cancelling booking {}", booking_id);

    let updated = diesel::update(bookings::table)
        .filter(bookings::booking_id.eq(booking_id))
        .set(bookings::status.eq(BookingStatus::Cancelled.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("booking {booking_id}")));
    }

    Ok(())
}
