// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Capacity;
use time::macros::format_description;
use time::{Date, Time};

/// The longest session an activity may run for (one full day).
pub const MAX_DURATION_MINUTES: u32 = 1440;

/// Validates activity fields at creation/update time.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The duration is zero or longer than [`MAX_DURATION_MINUTES`]
/// - A limited capacity is zero
pub fn validate_activity_fields(
    name: &str,
    duration_minutes: u32,
    capacity: Capacity,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidActivityName(String::from(
            "Activity name cannot be empty",
        )));
    }
    if duration_minutes == 0 || duration_minutes > MAX_DURATION_MINUTES {
        return Err(DomainError::InvalidDuration { duration_minutes });
    }
    if let Capacity::Limited(0) = capacity {
        return Err(DomainError::InvalidCapacity { capacity: 0 });
    }
    Ok(())
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: s.to_string(),
            error: e.to_string(),
        }
    })
}

/// Parses a wall-clock time as `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Returns an error if the string matches neither format.
pub fn parse_time(s: &str) -> Result<Time, DomainError> {
    Time::parse(s, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(s, format_description!("[hour]:[minute]")))
        .map_err(|e| DomainError::TimeParseError {
            time_string: s.to_string(),
            error: e.to_string(),
        })
}
