// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time-window arithmetic for booking conflicts and the temporal-legality rule.
//!
//! All interval math happens in seconds from midnight so that second-precision
//! booking times compare exactly. Windows are half-open: `[start, end)`. Two
//! back-to-back sessions (one ending exactly when the other starts) never
//! conflict, which is what makes consecutive classes bookable by the same
//! client.

use time::{Date, PrimitiveDateTime, Time};

/// A candidate or existing booking interval on a single calendar date.
///
/// The end bound may extend past midnight (`end_seconds > 86_400`); the
/// window is still attributed to its start date, matching how slots are
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start_seconds: u32,
    end_seconds: u32,
}

impl TimeWindow {
    /// Creates a window starting at `start` and running for
    /// `duration_minutes`.
    #[must_use]
    pub fn new(start: Time, duration_minutes: u32) -> Self {
        let start_seconds: u32 = u32::from(start.hour()) * 3600
            + u32::from(start.minute()) * 60
            + u32::from(start.second());
        // Saturate so an out-of-range duration can never invert the window.
        Self {
            start_seconds,
            end_seconds: start_seconds.saturating_add(duration_minutes.saturating_mul(60)),
        }
    }

    /// Returns the inclusive start bound in seconds from midnight.
    #[must_use]
    pub const fn start_seconds(&self) -> u32 {
        self.start_seconds
    }

    /// Returns the exclusive end bound in seconds from midnight.
    #[must_use]
    pub const fn end_seconds(&self) -> u32 {
        self.end_seconds
    }

    /// Half-open interval overlap test: `A.start < B.end && B.start < A.end`.
    ///
    /// `A.end == B.start` is not an overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_seconds < other.end_seconds && other.start_seconds < self.end_seconds
    }
}

/// An existing active booking's interval, pre-joined with its own activity's
/// duration, as loaded for the conflict comparison set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedWindow {
    /// The booking's canonical id (used for self-exclusion on reschedule).
    pub booking_id: i64,
    /// The booking's start time.
    pub start: Time,
    /// The booked activity's duration in minutes.
    pub duration_minutes: u32,
}

impl BookedWindow {
    /// Converts this booked interval into a comparable window.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.duration_minutes)
    }
}

/// The temporal-legality rule: a booking has occurred when its scheduled
/// date and time lie strictly before `now`.
///
/// A booking that has occurred may no longer be rescheduled or cancelled.
/// `now` is injected by the caller so the rule is deterministic under test.
#[must_use]
pub fn has_occurred(date: Date, time: Time, now: PrimitiveDateTime) -> bool {
    PrimitiveDateTime::new(date, time) < now
}
