// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-client time-overlap conflict check.

use crate::error::CoreError;
use crate::repository::BookingStore;
use gym_agenda_domain::TimeWindow;
use time::Date;

/// Determines whether `candidate` overlaps any active booking of
/// `client_id` on `date`.
///
/// Each existing booking's interval is computed from its own activity's
/// duration. Overlap is half-open: a booking that ends exactly when another
/// starts does not conflict. When `exclude_booking_id` is supplied (the
/// reschedule path), that booking is removed from the comparison set so a
/// booking can be moved without conflicting with itself.
///
/// Read-only; returns on the first overlapping match.
///
/// # Errors
///
/// Returns an error if the booking store fails.
pub fn has_conflict<S: BookingStore + ?Sized>(
    store: &mut S,
    client_id: i64,
    date: Date,
    candidate: TimeWindow,
    exclude_booking_id: Option<i64>,
) -> Result<bool, CoreError> {
    let windows = store.active_windows_for_client(client_id, date)?;

    Ok(windows
        .iter()
        .filter(|existing| Some(existing.booking_id) != exclude_booking_id)
        .any(|existing| existing.window().overlaps(&candidate)))
}
