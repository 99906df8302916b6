// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These types are the wire contract and are distinct from domain types.
//! Dates and times travel as strings (`YYYY-MM-DD`, `HH:MM[:SS]`) and are
//! validated at the boundary. Every response uses the same envelope:
//! `{ success, code, message, data? }`, where `code` is a stable outcome
//! discriminant callers can branch on.

use gym_agenda::BookingOutcome;
use gym_agenda_domain::{Booking, BookingDetails, Capacity};
use gym_agenda_persistence::ActivityOverview;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Time};

/// Request to create a booking. The actor's own id is the client id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub actor_id: i64,
    pub actor_role: String,
    pub activity_id: i64,
    pub date: String,
    pub time: String,
}

/// Request to move an existing booking to a new date/time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescheduleBookingRequest {
    pub actor_id: i64,
    pub actor_role: String,
    pub date: String,
    pub time: String,
}

/// Request to cancel a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub actor_id: i64,
    pub actor_role: String,
}

/// Request to create an activity.
///
/// `capacity` is `None` for unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    pub actor_id: i64,
    pub actor_role: String,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    pub capacity: Option<u32>,
}

/// Request to update an activity's catalog fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateActivityRequest {
    pub actor_id: i64,
    pub actor_role: String,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    pub capacity: Option<u32>,
}

/// Request to delete an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteActivityRequest {
    pub actor_id: i64,
    pub actor_role: String,
}

/// Request to register a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Serialized view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Catalog listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListActivitiesFilter {
    /// Restrict to one professional's activities.
    pub professional_id: Option<i64>,
    /// Hide activities with no remaining slots.
    pub available_only: bool,
}

/// Serialized view of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingData {
    pub booking_id: i64,
    pub client_id: i64,
    pub activity_id: i64,
    pub date: String,
    pub time: String,
    pub status: String,
}

/// Serialized view of a booking joined with display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetailsData {
    #[serde(flatten)]
    pub booking: BookingData,
    pub activity_name: String,
    pub activity_kind: String,
    pub duration_minutes: u32,
    pub professional_name: String,
    pub client_name: String,
}

/// Serialized view of an activity with its live booking load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityData {
    pub activity_id: i64,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    pub capacity: Option<u32>,
    pub professional_id: i64,
    pub active_bookings: u32,
    pub remaining_slots: Option<u32>,
}

/// The uniform response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful read response.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            code: String::from("ok"),
            message: String::from("OK"),
            data: Some(data),
        }
    }
}

pub(crate) fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| String::from("invalid-date"))
}

pub(crate) fn format_time(time: Time) -> String {
    time.format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_else(|_| String::from("invalid-time"))
}

impl From<&Booking> for BookingData {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            client_id: booking.client_id,
            activity_id: booking.activity_id,
            date: format_date(booking.date),
            time: format_time(booking.time),
            status: booking.status.as_str().to_string(),
        }
    }
}

impl From<&BookingDetails> for BookingDetailsData {
    fn from(details: &BookingDetails) -> Self {
        Self {
            booking: BookingData::from(&details.booking),
            activity_name: details.activity_name.clone(),
            activity_kind: details.activity_kind.as_str().to_string(),
            duration_minutes: details.duration_minutes,
            professional_name: details.professional_name.clone(),
            client_name: details.client_name.clone(),
        }
    }
}

impl From<&ActivityOverview> for ActivityData {
    fn from(overview: &ActivityOverview) -> Self {
        let capacity = match overview.activity.capacity {
            Capacity::Limited(limit) => Some(limit),
            Capacity::Unlimited => None,
        };
        Self {
            activity_id: overview.activity.activity_id.unwrap_or_default(),
            name: overview.activity.name.clone(),
            kind: overview.activity.kind.as_str().to_string(),
            description: overview.activity.description.clone(),
            duration_minutes: overview.activity.duration_minutes,
            capacity,
            professional_id: overview.activity.professional_id,
            active_bookings: overview.active_bookings,
            remaining_slots: overview.remaining_slots,
        }
    }
}

/// Maps a lifecycle outcome to the response envelope.
///
/// The `code` strings are a stable contract; clients branch on them.
#[must_use]
pub fn outcome_response(outcome: &BookingOutcome) -> ApiResponse<BookingData> {
    let (success, code, message, data) = match outcome {
        BookingOutcome::Created(booking) => (
            true,
            "created",
            String::from("Booking created"),
            Some(BookingData::from(booking)),
        ),
        BookingOutcome::Updated(booking) => (
            true,
            "updated",
            String::from("Booking rescheduled"),
            Some(BookingData::from(booking)),
        ),
        BookingOutcome::Cancelled => (true, "cancelled", String::from("Booking cancelled"), None),
        BookingOutcome::Conflict => (
            false,
            "conflict",
            String::from("Client already has an overlapping booking at this time"),
            None,
        ),
        BookingOutcome::NoVacancy => (
            false,
            "no_vacancy",
            String::from("No vacancy for this activity slot"),
            None,
        ),
        BookingOutcome::NotFound => (false, "not_found", String::from("Booking not found"), None),
        BookingOutcome::Forbidden => (
            false,
            "forbidden",
            String::from("Booking belongs to another client"),
            None,
        ),
        BookingOutcome::PastSchedule => (
            false,
            "past_schedule",
            String::from("Booking date/time has already passed"),
            None,
        ),
        BookingOutcome::AlreadyCancelled => (
            false,
            "already_cancelled",
            String::from("Booking is already cancelled"),
            None,
        ),
    };

    ApiResponse {
        success,
        code: String::from(code),
        message,
        data,
    }
}
