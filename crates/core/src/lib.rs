// Copyright (C) 2026 Gym Agenda Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod capacity;
mod conflict;
mod error;
mod lifecycle;
mod outcome;
mod repository;

#[cfg(test)]
mod tests;

pub use capacity::has_vacancy;
pub use conflict::has_conflict;
pub use error::CoreError;
pub use lifecycle::{cancel_booking, create_booking, find_booking, list_bookings, reschedule_booking};
pub use outcome::{BookingOutcome, CancelBooking, CreateBooking, RescheduleBooking};
pub use repository::{ActivityCatalog, BookingStore, NewBooking};
