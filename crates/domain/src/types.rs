// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Time};

/// Represents a user's role within the system.
///
/// Roles are fixed domain constants. Authorization decisions branch on this
/// closed enum with exhaustive matching, never on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A client who books activities.
    Client,
    /// A professional who offers class activities.
    Professional,
    /// A personal trainer who offers workout activities.
    #[serde(rename = "PersonalTrainer")]
    PersonalTrainer,
    /// An administrator with full read access.
    Administrator,
}

impl Role {
    /// Parses a role from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Client" => Ok(Self::Client),
            "Professional" => Ok(Self::Professional),
            "PersonalTrainer" => Ok(Self::PersonalTrainer),
            "Administrator" => Ok(Self::Administrator),
            _ => Err(DomainError::InvalidRole(format!("Unknown role: {s}"))),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Professional => "Professional",
            Self::PersonalTrainer => "PersonalTrainer",
            Self::Administrator => "Administrator",
        }
    }

    /// Returns whether this role offers activities (professionals and
    /// personal trainers both own activities).
    #[must_use]
    pub const fn offers_activities(&self) -> bool {
        matches!(self, Self::Professional | Self::PersonalTrainer)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the kind of an offered activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    /// A group class (e.g., spinning, yoga).
    Class,
    /// An individual workout session.
    Workout,
}

impl ActivityKind {
    /// Parses an activity kind from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid kind.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Class" => Ok(Self::Class),
            "Workout" => Ok(Self::Workout),
            _ => Err(DomainError::InvalidActivityKind(format!(
                "Unknown activity kind: {s}"
            ))),
        }
    }

    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Workout => "Workout",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents an activity's capacity limit.
///
/// Capacity is counted per discrete offered slot (exact date and time),
/// not per continuous time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    /// A fixed positive number of slots.
    Limited(u32),
    /// No capacity limit; the vacancy check always passes.
    Unlimited,
}

impl Capacity {
    /// Returns whether `active_count` existing bookings leave room for one more.
    #[must_use]
    pub const fn admits(&self, active_count: u32) -> bool {
        match self {
            Self::Limited(max) => active_count < *max,
            Self::Unlimited => true,
        }
    }

    /// Returns the remaining slot count, if limited.
    #[must_use]
    pub const fn remaining(&self, active_count: u32) -> Option<u32> {
        match self {
            Self::Limited(max) => Some(max.saturating_sub(active_count)),
            Self::Unlimited => None,
        }
    }
}

/// Represents the lifecycle status of a booking.
///
/// A booking starts `Active` and may only transition to `Cancelled`,
/// which is terminal. Cancelled bookings are never physically deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// The booking counts toward conflicts and capacity.
    #[default]
    Active,
    /// The booking was cancelled (terminal).
    Cancelled,
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BookingStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// The only valid transition is `Active` → `Cancelled`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Active, Self::Cancelled))
    }

    /// Returns whether this booking still participates in conflict and
    /// capacity checks.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Represents an offered activity.
///
/// Activities are created by professionals and read by the booking core as a
/// `(duration, capacity)` lookup only; the core never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the activity has not been persisted yet.
    pub activity_id: Option<i64>,
    /// The display name (non-empty).
    pub name: String,
    /// The activity kind.
    pub kind: ActivityKind,
    /// Optional free-form description.
    pub description: Option<String>,
    /// The session duration in minutes (always > 0).
    pub duration_minutes: u32,
    /// The per-slot capacity.
    pub capacity: Capacity,
    /// The owning professional's user id.
    pub professional_id: i64,
}

impl Activity {
    /// Creates a new `Activity` without a persisted id, validating its fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the duration is zero, or a
    /// limited capacity is zero.
    pub fn new(
        name: String,
        kind: ActivityKind,
        description: Option<String>,
        duration_minutes: u32,
        capacity: Capacity,
        professional_id: i64,
    ) -> Result<Self, DomainError> {
        crate::validation::validate_activity_fields(&name, duration_minutes, capacity)?;
        Ok(Self {
            activity_id: None,
            name,
            kind,
            description,
            duration_minutes,
            capacity,
            professional_id,
        })
    }

    /// Creates an `Activity` with an existing persisted id.
    ///
    /// Rows loaded from the store are trusted; field validation happened at
    /// creation time.
    #[must_use]
    pub const fn with_id(
        activity_id: i64,
        name: String,
        kind: ActivityKind,
        description: Option<String>,
        duration_minutes: u32,
        capacity: Capacity,
        professional_id: i64,
    ) -> Self {
        Self {
            activity_id: Some(activity_id),
            name,
            kind,
            description,
            duration_minutes,
            capacity,
            professional_id,
        }
    }
}

/// Represents a client's reservation of an activity at a specific date/time.
///
/// Dates are naive local calendar dates; times are local wall-clock times.
/// No time zone conversion is performed anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// The canonical numeric identifier assigned by the database.
    pub booking_id: i64,
    /// The booking client's user id.
    pub client_id: i64,
    /// The booked activity's id.
    pub activity_id: i64,
    /// The scheduled calendar date.
    pub date: Date,
    /// The scheduled wall-clock time.
    pub time: Time,
    /// The lifecycle status.
    pub status: BookingStatus,
}

/// A booking joined with display attributes from its activity and the
/// involved users, as returned by the role-dispatched listing queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// The booking itself.
    pub booking: Booking,
    /// The booked activity's name.
    pub activity_name: String,
    /// The booked activity's kind.
    pub activity_kind: ActivityKind,
    /// The booked activity's duration in minutes.
    pub duration_minutes: u32,
    /// The name of the professional who owns the activity.
    pub professional_name: String,
    /// The booking client's name.
    pub client_name: String,
}
