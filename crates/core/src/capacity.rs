// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-activity slot capacity check.

use crate::error::CoreError;
use crate::repository::{ActivityCatalog, BookingStore};
use time::{Date, Time};

/// Determines whether the `(activity, date, time)` slot still has room for
/// one more active booking.
///
/// Capacity is defined per discrete offered slot: the count matches the
/// exact date and time, not overlapping intervals. An unknown activity id
/// yields `false` (no vacancy — the check fails closed), and an unlimited
/// capacity always yields `true`.
///
/// Read-only.
///
/// # Errors
///
/// Returns an error if the catalog or booking store fails.
pub fn has_vacancy<S>(
    store: &mut S,
    activity_id: i64,
    date: Date,
    time: Time,
) -> Result<bool, CoreError>
where
    S: BookingStore + ActivityCatalog,
{
    let Some(activity) = store.find_activity(activity_id)? else {
        return Ok(false);
    };

    let active_count: u32 = store.count_active_at_slot(activity_id, date, time)?;
    Ok(activity.capacity.admits(active_count))
}
