// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and conversions between stored text columns and domain types.
//!
//! Dates are stored as `YYYY-MM-DD` text, times as `HH:MM:SS` text, and the
//! closed enums (`kind`, `status`, `role`) as their canonical strings. A row
//! that fails to convert is reported as `CorruptRow` rather than silently
//! skipped.

use diesel::prelude::*;
use gym_agenda_domain::{
    Activity, ActivityKind, Booking, BookingStatus, Capacity, Role, parse_date, parse_time,
};
use time::macros::format_description;
use time::{Date, Time};

use crate::diesel_schema::{activities, bookings, users};
use crate::error::PersistenceError;

/// A persisted user, as read back for listings and referential checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// An activity paired with its live booking load.
///
/// `active_bookings` counts `Active` bookings across all slots of the
/// activity; `remaining_slots` is `None` for unlimited capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOverview {
    pub activity: Activity,
    pub active_bookings: u32,
    pub remaining_slots: Option<u32>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    #[allow(dead_code)]
    pub created_at: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = activities)]
pub(crate) struct ActivityRow {
    pub activity_id: i64,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub capacity: Option<i32>,
    pub professional_id: i64,
    #[allow(dead_code)]
    pub created_at: String,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
pub(crate) struct BookingRow {
    pub booking_id: i64,
    pub client_id: i64,
    pub activity_id: i64,
    pub date: String,
    pub time: String,
    pub status: String,
    #[allow(dead_code)]
    pub created_at: String,
}

fn corrupt(table: &str, detail: impl std::fmt::Display) -> PersistenceError {
    PersistenceError::CorruptRow {
        table: table.to_string(),
        detail: detail.to_string(),
    }
}

pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| PersistenceError::Other(format!("Failed to format date: {e}")))
}

pub(crate) fn format_time(time: Time) -> Result<String, PersistenceError> {
    time.format(format_description!("[hour]:[minute]:[second]"))
        .map_err(|e| PersistenceError::Other(format!("Failed to format time: {e}")))
}

pub(crate) fn capacity_to_column(capacity: Capacity) -> Result<Option<i32>, PersistenceError> {
    match capacity {
        Capacity::Limited(limit) => i32::try_from(limit).map(Some).map_err(|_| {
            PersistenceError::Other(format!("Activity capacity {limit} out of range"))
        }),
        Capacity::Unlimited => Ok(None),
    }
}

fn capacity_from_column(
    capacity: Option<i32>,
    activity_id: i64,
) -> Result<Capacity, PersistenceError> {
    match capacity {
        None => Ok(Capacity::Unlimited),
        Some(limit) => u32::try_from(limit).map(Capacity::Limited).map_err(|_| {
            corrupt(
                "activities",
                format!("activity {activity_id} has negative capacity {limit}"),
            )
        }),
    }
}

impl TryFrom<UserRow> for UserRecord {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = Role::parse(&row.role).map_err(|e| corrupt("users", e))?;
        Ok(Self {
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            role,
        })
    }
}

impl TryFrom<ActivityRow> for Activity {
    type Error = PersistenceError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let kind = ActivityKind::parse(&row.kind).map_err(|e| corrupt("activities", e))?;
        let capacity = capacity_from_column(row.capacity, row.activity_id)?;
        let duration_minutes = u32::try_from(row.duration_minutes).map_err(|_| {
            corrupt(
                "activities",
                format!(
                    "activity {} has negative duration {}",
                    row.activity_id, row.duration_minutes
                ),
            )
        })?;
        Ok(Self::with_id(
            row.activity_id,
            row.name,
            kind,
            row.description,
            duration_minutes,
            capacity,
            row.professional_id,
        ))
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let date = parse_date(&row.date).map_err(|e| corrupt("bookings", e))?;
        let time = parse_time(&row.time).map_err(|e| corrupt("bookings", e))?;
        let status = row
            .status
            .parse::<BookingStatus>()
            .map_err(|e| corrupt("bookings", e))?;
        Ok(Self {
            booking_id: row.booking_id,
            client_id: row.client_id,
            activity_id: row.activity_id,
            date,
            time,
            status,
        })
    }
}
