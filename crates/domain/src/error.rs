// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Activity name is empty or invalid.
    InvalidActivityName(String),
    /// Activity duration must be between 1 and 1440 minutes.
    InvalidDuration {
        /// The invalid duration value.
        duration_minutes: u32,
    },
    /// A limited capacity must be greater than zero.
    InvalidCapacity {
        /// The invalid capacity value.
        capacity: u32,
    },
    /// Activity kind is invalid.
    InvalidActivityKind(String),
    /// Role is invalid.
    InvalidRole(String),
    /// Booking status string is invalid.
    InvalidBookingStatus(String),
    /// Failed to parse a calendar date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a wall-clock time from a string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidActivityName(msg) => write!(f, "Invalid activity name: {msg}"),
            Self::InvalidDuration { duration_minutes } => {
                write!(
                    f,
                    "Invalid duration: {duration_minutes}. Must be between 1 and 1440 minutes"
                )
            }
            Self::InvalidCapacity { capacity } => {
                write!(f, "Invalid capacity: {capacity}. Must be greater than 0")
            }
            Self::InvalidActivityKind(msg) => write!(f, "Invalid activity kind: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidBookingStatus(msg) => write!(f, "Invalid booking status: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
